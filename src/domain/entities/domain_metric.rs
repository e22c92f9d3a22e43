//! Domain metric entity.

/// Count of URL records grouped by canonical domain.
///
/// Never persisted; computed on demand by aggregating URL records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMetric {
    pub domain: String,
    pub count: i64,
}

impl DomainMetric {
    pub fn new(domain: impl Into<String>, count: i64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}

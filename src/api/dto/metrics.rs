//! DTOs for the domain metrics endpoint.

use serde::Serialize;

use crate::domain::entities::DomainMetric;

/// Top domains report.
#[derive(Debug, Serialize)]
pub struct TopDomainsResponse {
    pub domains: Vec<DomainMetricItem>,
}

/// Number of shortened links for a single domain.
#[derive(Debug, Serialize)]
pub struct DomainMetricItem {
    pub domain: String,
    pub count: i64,
}

impl From<DomainMetric> for DomainMetricItem {
    fn from(metric: DomainMetric) -> Self {
        Self {
            domain: metric.domain,
            count: metric.count,
        }
    }
}

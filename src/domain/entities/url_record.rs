//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with metadata.
///
/// Records are created once per distinct original URL and afterwards only
/// mutated through access-count increments.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    /// Host of `original_url` with a leading `www.` removed.
    pub domain: String,
    pub created_at: DateTime<Utc>,
    pub access_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        domain: String,
        created_at: DateTime<Utc>,
        access_count: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            domain,
            created_at,
            access_count,
        }
    }
}

/// Input data for creating a new URL record.
///
/// The store assigns `id`, `created_at` and starts `access_count` at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub domain: String,
}

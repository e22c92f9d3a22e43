//! Repository trait for URL record data access.

use crate::domain::entities::{DomainMetric, NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the insert, including
    /// a uniqueness violation on the short code.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds the first record whose original URL equals `original_url` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the access count of a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_access_count(&self, id: i64) -> Result<(), AppError>;

    /// Groups records by domain and returns the `limit` largest groups,
    /// ordered by count descending.
    ///
    /// Order among domains with equal counts is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_top_domains(&self, limit: i64) -> Result<Vec<DomainMetric>, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

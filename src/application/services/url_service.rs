//! URL shortening and resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{DomainMetric, NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::canonical_domain::canonical_domain;
use crate::utils::code_generator::{generate_code, is_reserved_code};

/// Service for shortening URLs, resolving short codes and reporting
/// domain metrics.
///
/// The repository is injected at construction; the service holds no other
/// state besides the configured code length.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service generating codes of `code_length` characters.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Returns the configured short code length.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Shortens `long_url`, reusing an existing record for the same URL.
    ///
    /// # Deduplication
    ///
    /// An existing record whose original URL equals `long_url` exactly is
    /// returned unchanged. No normalization is applied, so
    /// `https://example.com` and `https://example.com/` are distinct.
    ///
    /// # Code Generation
    ///
    /// Candidate codes are regenerated for as long as they are taken or
    /// reserved. The loop has no attempt limit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is not a parseable URL.
    /// Returns [`AppError::Internal`] if the repository fails, including an
    /// insert rejected by the unique index on short codes.
    pub async fn shorten_url(&self, long_url: &str) -> Result<UrlRecord, AppError> {
        let domain = canonical_domain(long_url)
            .map_err(|e| AppError::bad_request(format!("Invalid URL: {}", e)))?;

        if let Some(existing) = self.repository.find_by_original_url(long_url).await? {
            debug!(short_code = %existing.short_code, "Reusing existing short code");
            return Ok(existing);
        }

        let short_code = self.generate_unique_code().await?;

        let record = self
            .repository
            .create(NewUrlRecord {
                original_url: long_url.to_string(),
                short_code,
                domain,
            })
            .await?;

        info!(
            short_code = %record.short_code,
            domain = %record.domain,
            "Created short link"
        );

        Ok(record)
    }

    /// Resolves a short code to its original URL and counts the access.
    ///
    /// The access counter is best-effort: an increment failure is logged and
    /// does not fail the resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this short code.
    /// Returns [`AppError::Internal`] if the lookup itself fails.
    pub async fn get_original_url(&self, short_code: &str) -> Result<String, AppError> {
        let record = self
            .repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        if let Err(e) = self.repository.increment_access_count(record.id).await {
            warn!(
                short_code = %short_code,
                error = %e,
                "Failed to increment access count"
            );
        }

        Ok(record.original_url)
    }

    /// Returns the `limit` domains with the most shortened links.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn get_top_domains(&self, limit: i64) -> Result<Vec<DomainMetric>, AppError> {
        self.repository.get_top_domains(limit).await
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        let mut code = generate_code(self.code_length);

        while is_reserved_code(&code)
            || self.repository.find_by_short_code(&code).await?.is_some()
        {
            warn!(short_code = %code, "Short code collision, regenerating");
            code = generate_code(self.code_length);
        }

        Ok(code)
    }
}

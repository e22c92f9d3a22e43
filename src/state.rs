//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;

/// State shared by all request handlers.
///
/// Cloned per request; the service sits behind an [`Arc`] and the repository
/// behind a trait object, so handlers do not depend on the backing store.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
    /// Prefix for generated short links, without a trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService<dyn UrlRepository>>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            url_service,
            base_url,
        }
    }

    /// Builds the public short link for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }
}

//! Versioned API route configuration.

use crate::api::handlers::{shorten_handler, top_domains_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Version 1 of the JSON API, nested under `/api` by [`crate::routes`].
///
/// # Endpoints
///
/// - `POST /v1/shorten`             - Create or reuse a short link
/// - `GET  /v1/metrics/top-domains` - Top 3 domains by shortened-link count
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/shorten", post(shorten_handler))
        .route("/v1/metrics/top-domains", get(top_domains_handler))
}

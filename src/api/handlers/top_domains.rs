//! Handler for the top domains metric.

use axum::{Json, extract::State};
use tracing::error;

use crate::api::dto::metrics::TopDomainsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Number of domains reported by the metrics endpoint.
pub const TOP_DOMAINS_LIMIT: i64 = 3;

/// Returns the domains with the most shortened links.
///
/// # Endpoint
///
/// `GET /api/v1/metrics/top-domains`
///
/// # Response
///
/// ```json
/// {
///   "domains": [
///     { "domain": "example.com", "count": 5 },
///     { "domain": "test.com", "count": 3 },
///     { "domain": "demo.com", "count": 1 }
///   ]
/// }
/// ```
///
/// `domains` is an empty array when nothing has been shortened yet.
///
/// # Errors
///
/// Returns 500 `{"error": "Failed to get metrics"}` if the aggregation fails.
pub async fn top_domains_handler(
    State(state): State<AppState>,
) -> Result<Json<TopDomainsResponse>, AppError> {
    let metrics = state
        .url_service
        .get_top_domains(TOP_DOMAINS_LIMIT)
        .await
        .map_err(|e| {
            error!("Failed to get top domains: {}", e);
            AppError::internal("Failed to get metrics")
        })?;

    Ok(Json(TopDomainsResponse {
        domains: metrics.into_iter().map(Into::into).collect(),
    }))
}

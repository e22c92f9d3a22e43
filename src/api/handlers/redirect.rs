//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Each successful resolution increments the record's access count; a failed
/// increment does not affect the redirect.
///
/// # Response
///
/// `302 Found` with the original URL in the `Location` header.
///
/// # Errors
///
/// - 404 `{"error": "URL not found"}` if the short code doesn't exist
/// - 500 `{"error": "Internal server error"}` if the lookup fails
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .url_service
        .get_original_url(&short_code)
        .await
        .map_err(|err| match err {
            AppError::NotFound { .. } => AppError::not_found("URL not found"),
            other => {
                error!("Failed to resolve short code {}: {}", short_code, other);
                AppError::internal("Internal server error")
            }
        })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}

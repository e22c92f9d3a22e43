//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, error};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

const INVALID_URL: &str = "Invalid URL";
const SHORTEN_FAILED: &str = "Failed to shorten URL";

/// Creates (or reuses) a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/aB3xY9" }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "Invalid URL"}` if the body is not JSON, lacks `url`, or
///   `url` is not a valid URL
/// - 500 `{"error": "Failed to shorten URL"}` on any other failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected shorten request body: {}", rejection);
        AppError::bad_request(INVALID_URL)
    })?;

    request.validate().map_err(|e| {
        debug!("Shorten request failed validation: {}", e);
        AppError::bad_request(INVALID_URL)
    })?;

    let record = state
        .url_service
        .shorten_url(&request.url)
        .await
        .map_err(|err| match err {
            AppError::Validation { .. } => AppError::bad_request(INVALID_URL),
            other => {
                error!("Failed to shorten URL: {}", other);
                AppError::internal(SHORTEN_FAILED)
            }
        })?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&record.short_code),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::{BASE_URL, mock_state};
    use crate::domain::entities::UrlRecord;
    use crate::domain::repositories::MockUrlRepository;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::Utc;

    #[tokio::test]
    async fn test_shorten_store_failure_is_500() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_original_url()
            .returning(|_| Err(AppError::internal("Database error")));

        let state = mock_state(mock_repo);
        let request = ShortenRequest {
            url: "https://example.com".to_string(),
        };

        let err = shorten_handler(State(state), Ok(Json(request)))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), SHORTEN_FAILED);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_shorten_hostless_url_succeeds() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        mock_repo.expect_find_by_short_code().returning(|_| Ok(None));
        mock_repo.expect_create().returning(|new_record| {
            Ok(UrlRecord::new(
                7,
                new_record.original_url,
                new_record.short_code,
                new_record.domain,
                Utc::now(),
                0,
            ))
        });

        let state = mock_state(mock_repo);
        let request = ShortenRequest {
            url: "mailto:someone@example.com".to_string(),
        };

        let Json(response) = shorten_handler(State(state), Ok(Json(request)))
            .await
            .unwrap();

        assert!(response.short_url.starts_with(BASE_URL));
    }
}

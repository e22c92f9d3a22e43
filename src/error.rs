//! Application error type and its HTTP representation.
//!
//! Every error is rendered as a flat JSON body:
//!
//! ```json
//! { "error": "URL not found" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by repositories, services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input. Rendered as `400 Bad Request`.
    #[error("{message}")]
    Validation { message: String },

    /// Unknown resource. Rendered as `404 Not Found`.
    #[error("{message}")]
    NotFound { message: String },

    /// Persistence or other internal failure. Rendered as `500 Internal Server Error`.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Converts a database error into [`AppError::Internal`], logging the cause.
///
/// Unique violations (e.g. a short code inserted concurrently by another
/// request) are tagged with the violated constraint.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            tracing::error!(
                constraint = db.constraint().unwrap_or("unknown"),
                "Unique constraint violation: {}",
                db.message()
            );
            return AppError::internal("Unique constraint violation");
        }
    }

    tracing::error!("Database error: {}", e);
    AppError::internal("Database error")
}

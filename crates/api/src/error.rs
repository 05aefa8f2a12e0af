use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use bikematrix_core::error::CoreError;
use bikematrix_core::validation::ValidationOutcome;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bikematrix-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A rejected submission, carrying the per-field messages.
    #[error("Validation failed")]
    Validation(ValidationOutcome),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            // Problem-details-style envelope: one message list per field.
            AppError::Validation(outcome) => {
                let mut errors = serde_json::Map::new();
                for e in &outcome.errors {
                    errors.insert(e.field.to_string(), json!([e.message]));
                }
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Validation failed",
                        "code": "VALIDATION_ERROR",
                        "errors": errors,
                    }),
                )
            }

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and JSON body.
///
/// `RowNotFound` maps to 404; everything else is logged and sanitized to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, serde_json::Value) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            json!({ "error": "Resource not found", "code": "NOT_FOUND" }),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                }),
            )
        }
    }
}

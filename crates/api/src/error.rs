use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storeapps_core::error::CoreError;
use storeapps_core::validation::FieldError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses;
/// not-found is the one outcome answered with an empty body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storeapps_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store failure from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Core(CoreError::InvalidFields(fields)) => {
                let body = json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": group_by_field(&fields),
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            AppError::Database(err) => classify_sqlx_error(&err),
            AppError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        }
    }
}

fn error_body(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// Collect field errors into `{ field: [reason, ...] }`, fields in name order.
fn group_by_field(fields: &[FieldError]) -> BTreeMap<&str, Vec<&str>> {
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for f in fields {
        grouped
            .entry(f.field.as_str())
            .or_default()
            .push(f.message.as_str());
    }
    grouped
}

/// Classify a sqlx error into an HTTP response.
///
/// - `RowNotFound` maps to an empty 404.
/// - Everything else means the store is unavailable or failed: 500 with a
///   sanitized message, the detail only going to the log.
fn classify_sqlx_error(err: &sqlx::Error) -> Response {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND.into_response(),
        other => {
            tracing::error!(error = %other, "Database error");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

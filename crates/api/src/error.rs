use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use hostelcare_core::error::CoreError;
use hostelcare_core::validation::FieldErrors;
use hostelcare_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// Internal detail never reaches the wire on a 500; it is logged instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hostelcare_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from the record store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A form failed validation; carries the field-keyed messages.
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} with id {id} not found") }),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, json!({ "error": msg }))
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, json!({ "error": msg }))
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_server_error()
                }
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                internal_server_error()
            }

            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "fields": fields,
                }),
            ),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_server_error()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// The sanitized 500 payload: message suppressed to avoid leaking internals.
fn internal_server_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Internal Server Error" }),
    )
}

use ama_core::error::CoreError;
use ama_db::{DbError, StoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for request-level validation failures and [`DbError`]
/// for the store/document pipeline. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ama-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store or stored-document error from `ama-db`.
    #[error(transparent)]
    Db(#[from] DbError),

    /// An internal error whose message is safe to return to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Db(db) => classify_db_error(db),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a repository error into an HTTP status, error code, and message.
///
/// Read pipelines carry no client input that could cause a failure, so every
/// variant maps to 500; the code distinguishes the failure class.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::Store(StoreError::Unavailable) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "STORE_UNAVAILABLE",
            err.to_string(),
        ),
        DbError::Store(store_err) => {
            tracing::error!(error = %store_err, "Document store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                "Document store operation failed".to_string(),
            )
        }
        DbError::Validation { collection, .. } => {
            tracing::error!(error = %err, "Stored document failed validation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INVALID_DOCUMENT",
                format!("A stored document in `{collection}` does not match its schema"),
            )
        }
    }
}

/// Truncate an error message to at most `max_chars` characters.
pub(crate) fn truncate_error(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

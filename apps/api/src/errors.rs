use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// User-supplied parameter fails an expected format (e.g. a deadline
    /// without a leading month count).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Model output parsed as JSON but failed the roadmap schema rules.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Model output still did not parse as JSON after repair. The last
    /// attempted repaired text is kept for diagnostics only — it is logged,
    /// never returned to the caller.
    #[error("JSON repair exhausted: {source}")]
    RepairExhausted {
        source: serde_json::Error,
        attempted: String,
    },

    #[error("Completion service error: {0}")]
    Llm(#[from] LlmError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::MalformedInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => {
                tracing::error!("Roadmap validation failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Roadmap validation failed: {msg}"))
            }
            AppError::RepairExhausted { source, attempted } => {
                tracing::error!("JSON repair exhausted: {source}");
                tracing::error!("Last attempted JSON: {attempted}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Model response could not be repaired into valid JSON".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("Completion service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The completion service call failed".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

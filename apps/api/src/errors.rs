use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::CompletionError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Log in to continue".to_string(),
            ),
            AppError::Completion(CompletionError::EmptyPrompt) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Prompt cannot be empty".to_string(),
            ),
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPLETION_ERROR",
                    "The AI service could not generate a response".to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

//! Axum route handlers for the Assistant API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::accounts::session::require_current_user;
use crate::assistant::answer_question;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::SessionScope;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub reply: String,
}

/// POST /api/v1/assistant
pub async fn handle_ask(
    State(state): State<AppState>,
    scope: SessionScope,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    require_current_user(&state.scoped_store(&scope)).await?;

    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = answer_question(&state.llm, &request.message).await?;
    Ok(Json(AssistantResponse { reply }))
}

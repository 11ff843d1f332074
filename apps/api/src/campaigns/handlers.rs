//! Axum route handlers for the Campaigns API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::accounts::session::require_current_user;
use crate::campaigns::generate_campaign_content;
use crate::errors::AppError;
use crate::models::marketing::CampaignDetails;
use crate::state::AppState;
use crate::store::SessionScope;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContentRequest {
    /// What to write, e.g. "ad copy" or "email newsletter".
    pub content_type: String,
    #[serde(flatten)]
    pub details: CampaignDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContentResponse {
    pub content_type: String,
    pub content: String,
}

/// POST /api/v1/campaigns/content
pub async fn handle_generate_content(
    State(state): State<AppState>,
    scope: SessionScope,
    Json(request): Json<CampaignContentRequest>,
) -> Result<Json<CampaignContentResponse>, AppError> {
    require_current_user(&state.scoped_store(&scope)).await?;

    let content_type = request.content_type.trim();
    if content_type.is_empty() {
        return Err(AppError::Validation("contentType cannot be empty".to_string()));
    }
    if request.details.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let content = generate_campaign_content(&state.llm, content_type, &request.details).await?;
    Ok(Json(CampaignContentResponse {
        content_type: content_type.to_string(),
        content,
    }))
}

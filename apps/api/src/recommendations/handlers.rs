//! Axum route handlers for the Product Recommendation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::accounts::session::require_current_user;
use crate::errors::AppError;
use crate::models::marketing::ProductDetails;
use crate::recommendations::recommend_tools;
use crate::state::AppState;
use crate::store::SessionScope;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<String>,
}

/// POST /api/v1/products/recommendations
///
/// Name, price and description are required; the category defaults to
/// Marketing Automation. A failed completion returns an empty list.
pub async fn handle_recommend(
    State(state): State<AppState>,
    scope: SessionScope,
    Json(product): Json<ProductDetails>,
) -> Result<Json<RecommendationResponse>, AppError> {
    require_current_user(&state.scoped_store(&scope)).await?;

    let missing: Vec<&str> = [
        ("name", &product.name),
        ("price", &product.price),
        ("description", &product.description),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let recommendations = recommend_tools(&state.llm, &product).await;
    Ok(Json(RecommendationResponse { recommendations }))
}

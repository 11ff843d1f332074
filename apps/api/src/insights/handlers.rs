//! Axum route handlers for the Dashboard API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::accounts::session::require_current_user;
use crate::errors::AppError;
use crate::insights::geolocation::{Geocoder, LocationUnavailable};
use crate::insights::{fetch_local_insights, LocalInsights};
use crate::models::marketing::NamedCategorizedItem;
use crate::state::AppState;
use crate::store::SessionScope;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Skips reverse geocoding when the caller already knows the city.
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub greeting_name: String,
    /// City name, or the reason it could not be resolved.
    pub location: String,
    pub location_resolved: bool,
    pub products: Vec<NamedCategorizedItem>,
    pub trends: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

async fn resolve_city(
    geocoder: &Geocoder,
    query: &DashboardQuery,
) -> Result<String, LocationUnavailable> {
    let city = query.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
    if let Some(city) = city {
        return Ok(city.to_string());
    }
    match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => geocoder.city_for(lat, lon).await,
        _ => Err(LocationUnavailable::MissingCoordinates),
    }
}

/// GET /api/v1/dashboard
///
/// Resolves the caller's city and returns local products and marketing trends.
/// An unresolved location halts the completion call and is reported as text.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    scope: SessionScope,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let user = require_current_user(&state.scoped_store(&scope)).await?;

    let resolved = resolve_city(&state.geocoder, &query).await;
    let (location, location_resolved, insights) = match resolved {
        Ok(city) => {
            let country = &state.config.market_country;
            let insights = fetch_local_insights(&state.llm, &city, country).await;
            (city, true, insights)
        }
        Err(e) => {
            warn!("Location unavailable: {e}");
            (e.to_string(), false, LocalInsights::default())
        }
    };

    Ok(Json(DashboardResponse {
        greeting_name: user.display_name().to_string(),
        location,
        location_resolved,
        products: insights.products,
        trends: insights.trends,
        generated_at: Utc::now(),
    }))
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::assistant::handlers as assistant;
use crate::campaigns::handlers as campaigns;
use crate::insights::handlers as insights;
use crate::recommendations::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/v1/accounts/register", post(accounts::handle_register))
        .route("/api/v1/accounts/login", post(accounts::handle_login))
        .route("/api/v1/accounts/logout", post(accounts::handle_logout))
        .route("/api/v1/session", get(accounts::handle_get_session))
        // Pages (require a current user)
        .route("/api/v1/dashboard", get(insights::handle_dashboard))
        .route("/api/v1/assistant", post(assistant::handle_ask))
        .route(
            "/api/v1/campaigns/content",
            post(campaigns::handle_generate_content),
        )
        .route(
            "/api/v1/products/recommendations",
            post(recommendations::handle_recommend),
        )
        .with_state(state)
}

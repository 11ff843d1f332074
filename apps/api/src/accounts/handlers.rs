//! Axum route handlers for the Accounts API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::accounts::registration::{register_user, RegistrationRequest};
use crate::accounts::session::{login, logout, require_current_user, LoginRequest};
use crate::errors::AppError;
use crate::models::user::{CurrentUser, RegisteredUser};
use crate::state::AppState;
use crate::store::SessionScope;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: RegisteredUser,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: CurrentUser,
}

/// POST /api/v1/accounts/register
pub async fn handle_register(
    State(state): State<AppState>,
    scope: SessionScope,
    Json(request): Json<RegistrationRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let store = state.scoped_store(&scope);
    let user = register_user(&store, request).await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { user })))
}

/// POST /api/v1/accounts/login
pub async fn handle_login(
    State(state): State<AppState>,
    scope: SessionScope,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let store = state.scoped_store(&scope);
    let user = login(&store, request).await?;
    Ok(Json(SessionResponse { user }))
}

/// POST /api/v1/accounts/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    scope: SessionScope,
) -> Result<StatusCode, AppError> {
    logout(&state.scoped_store(&scope)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
    scope: SessionScope,
) -> Result<Json<SessionResponse>, AppError> {
    let user = require_current_user(&state.scoped_store(&scope)).await?;
    Ok(Json(SessionResponse { user }))
}

//! Name-capture login and the current-user record.

use serde::Deserialize;
use tracing::info;

use crate::accounts::registration::load_users;
use crate::accounts::CURRENT_USER_KEY;
use crate::errors::AppError;
use crate::models::user::CurrentUser;
use crate::store::ScopedStore;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub name: String,
    pub email: Option<String>,
}

/// Captures the caller as the current user. A registered record with the same
/// email (case-insensitive) is attached as the profile; nothing is verified.
pub async fn login(store: &ScopedStore, request: LoginRequest) -> Result<CurrentUser, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    let profile = match &email {
        Some(email) => load_users(store)
            .await?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)),
        None => None,
    };

    let user = CurrentUser {
        full_name: name.to_string(),
        email,
        profile,
    };
    store.set_json(CURRENT_USER_KEY, &user).await?;

    info!(scope = store.scope(), "User logged in");
    Ok(user)
}

pub async fn logout(store: &ScopedStore) -> Result<(), AppError> {
    store.clear(CURRENT_USER_KEY).await?;
    Ok(())
}

pub async fn current_user(store: &ScopedStore) -> Result<Option<CurrentUser>, AppError> {
    Ok(store.get_json(CURRENT_USER_KEY).await?)
}

/// Gate for pages that need a logged-in user.
pub async fn require_current_user(store: &ScopedStore) -> Result<CurrentUser, AppError> {
    current_user(store).await?.ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::registration::{register_user, RegistrationRequest};
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn store() -> ScopedStore {
        ScopedStore::new(Arc::new(MemoryStore::default()), "test")
    }

    #[tokio::test]
    async fn test_login_captures_name_only() {
        let store = store();
        let user = login(
            &store,
            LoginRequest {
                name: "  Dana  ".into(),
                email: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(user.full_name, "Dana");
        assert_eq!(user.profile, None);
        assert_eq!(current_user(&store).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_name() {
        let store = store();
        let err = login(&store, LoginRequest::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(current_user(&store).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_attaches_registered_profile_by_email() {
        let store = store();
        let registered = register_user(
            &store,
            RegistrationRequest {
                full_name: "Dana Kim".into(),
                email: "dana@example.com".into(),
                phone_number: "555".into(),
                industry: "Tech".into(),
                country: "India".into(),
                state: "Goa".into(),
                city: "Panaji".into(),
                user_type: "Marketer".into(),
                lead_source: "Referral".into(),
                estimated_budget: "<$1k".into(),
                expected_time_to_buy: "Now".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let user = login(
            &store,
            LoginRequest {
                name: "Dana".into(),
                email: Some("DANA@example.com".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(user.profile, Some(registered));
    }

    #[tokio::test]
    async fn test_logout_then_require_is_unauthorized() {
        let store = store();
        login(
            &store,
            LoginRequest {
                name: "Dana".into(),
                email: None,
            },
        )
        .await
        .unwrap();
        assert!(require_current_user(&store).await.is_ok());

        logout(&store).await.unwrap();
        assert!(matches!(
            require_current_user(&store).await,
            Err(AppError::Unauthorized)
        ));
    }
}

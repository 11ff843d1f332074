//! Three-step registration wizard. Each step names its required fields.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::accounts::USERS_KEY;
use crate::errors::AppError;
use crate::models::user::RegisteredUser;
use crate::store::ScopedStore;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub industry: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub user_type: String,
    pub lead_source: String,
    pub campaign: Option<String>,
    pub marketing_campaign_id: Option<String>,
    pub estimated_budget: String,
    pub expected_time_to_buy: String,
}

impl RegistrationRequest {
    /// Required fields for a wizard step, as (field name, value) pairs.
    fn step_fields(&self, step: u8) -> Vec<(&'static str, &str)> {
        match step {
            1 => vec![
                ("fullName", self.full_name.as_str()),
                ("email", self.email.as_str()),
                ("phoneNumber", self.phone_number.as_str()),
            ],
            2 => vec![
                ("industry", self.industry.as_str()),
                ("country", self.country.as_str()),
                ("state", self.state.as_str()),
                ("city", self.city.as_str()),
            ],
            3 => vec![
                ("userType", self.user_type.as_str()),
                ("leadSource", self.lead_source.as_str()),
                ("estimatedBudget", self.estimated_budget.as_str()),
                ("expectedTimeToBuy", self.expected_time_to_buy.as_str()),
            ],
            _ => Vec::new(),
        }
    }

    /// Missing required fields of one step, in form order.
    pub fn missing_in_step(&self, step: u8) -> Vec<&'static str> {
        self.step_fields(step)
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Fails on the first step that has a missing field.
    pub fn validate(&self) -> Result<(), AppError> {
        for step in 1..=3 {
            let missing = self.missing_in_step(step);
            if !missing.is_empty() {
                return Err(AppError::Validation(format!(
                    "step {step} is incomplete: missing {}",
                    missing.join(", ")
                )));
            }
        }
        Ok(())
    }

    fn into_user(self, id: String) -> RegisteredUser {
        RegisteredUser {
            id,
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number,
            industry: self.industry,
            country: self.country,
            state: self.state,
            city: self.city,
            user_type: self.user_type,
            lead_source: self.lead_source,
            campaign: self.campaign.filter(|c| !c.trim().is_empty()),
            marketing_campaign_id: self.marketing_campaign_id.filter(|c| !c.trim().is_empty()),
            estimated_budget: self.estimated_budget,
            expected_time_to_buy: self.expected_time_to_buy,
        }
    }
}

pub async fn load_users(store: &ScopedStore) -> Result<Vec<RegisteredUser>, AppError> {
    Ok(store
        .get_json::<Vec<RegisteredUser>>(USERS_KEY)
        .await?
        .unwrap_or_default())
}

/// Validates and appends a new user record. Emails are not deduplicated.
pub async fn register_user(
    store: &ScopedStore,
    request: RegistrationRequest,
) -> Result<RegisteredUser, AppError> {
    request.validate()?;

    let mut users = load_users(store).await?;
    let user = request.into_user(Utc::now().timestamp_millis().to_string());
    users.push(user.clone());
    store.set_json(USERS_KEY, &users).await?;

    info!(scope = store.scope(), user_id = %user.id, "Registered user");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn complete_request() -> RegistrationRequest {
        RegistrationRequest {
            full_name: "Priya Shah".into(),
            email: "priya@example.com".into(),
            phone_number: "+91 98765 43210".into(),
            industry: "Retail".into(),
            country: "India".into(),
            state: "Maharashtra".into(),
            city: "Pune".into(),
            user_type: "Business Owner".into(),
            lead_source: "Google Search".into(),
            campaign: Some("".into()),
            marketing_campaign_id: None,
            estimated_budget: "$1k-$5k".into(),
            expected_time_to_buy: "1-3 months".into(),
        }
    }

    fn store() -> ScopedStore {
        ScopedStore::new(Arc::new(MemoryStore::default()), "test")
    }

    #[test]
    fn test_complete_request_validates() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_per_step() {
        let request = RegistrationRequest {
            phone_number: " ".into(),
            city: String::new(),
            ..complete_request()
        };
        assert_eq!(request.missing_in_step(1), vec!["phoneNumber"]);
        assert_eq!(request.missing_in_step(2), vec!["city"]);
        assert!(request.missing_in_step(3).is_empty());

        match request.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("step 1"));
                assert!(msg.contains("phoneNumber"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_fields_not_required() {
        let request = RegistrationRequest {
            campaign: None,
            marketing_campaign_id: None,
            ..complete_request()
        };
        assert!(request.validate().is_ok());
    }

    #[tokio::test]
    async fn test_register_appends_in_order() {
        let store = store();
        let first = register_user(&store, complete_request()).await.unwrap();
        let second = register_user(
            &store,
            RegistrationRequest {
                full_name: "Arjun Rao".into(),
                ..complete_request()
            },
        )
        .await
        .unwrap();

        let users = load_users(&store).await.unwrap();
        assert_eq!(users, vec![first.clone(), second]);
        assert_eq!(first.campaign, None);
        assert!(first.id.parse::<i64>().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_registration_stores_nothing() {
        let store = store();
        let request = RegistrationRequest {
            email: String::new(),
            ..complete_request()
        };
        assert!(register_user(&store, request).await.is_err());
        assert!(load_users(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stored_records_use_camel_case() {
        let store = store();
        register_user(&store, complete_request()).await.unwrap();
        let raw = store.get(USERS_KEY).await.unwrap().unwrap();
        assert!(raw.contains("\"fullName\":\"Priya Shah\""));
        assert!(raw.contains("\"expectedTimeToBuy\""));
    }
}

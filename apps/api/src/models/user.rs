use serde::{Deserialize, Serialize};

/// A record appended to the `users` list at registration.
/// Field names match the browser-era records so stored data stays readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisteredUser {
    pub id: String,
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

/// The unauthenticated "current user" captured at login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentUser {
    pub full_name: String,
    pub email: Option<String>,
    /// Present when the login matched a registered record.
    pub profile: Option<RegisteredUser>,
}

impl CurrentUser {
    /// Name shown in the dashboard greeting.
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            "User"
        } else {
            name
        }
    }
}

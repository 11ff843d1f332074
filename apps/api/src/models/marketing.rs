use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extraction::literal_text;

/// A product recommendation as emitted by the model. Decodes from any JSON value:
/// missing or null fields are empty, other non-string fields render as JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct NamedCategorizedItem {
    pub name: String,
    pub category: String,
}

impl From<Value> for NamedCategorizedItem {
    fn from(value: Value) -> Self {
        let field = |key: &str| value.get(key).map(literal_text).unwrap_or_default();
        Self {
            name: field("name"),
            category: field("category"),
        }
    }
}

/// The fixed set of product categories offered by the recommendation form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    #[default]
    #[serde(rename = "Marketing Automation")]
    MarketingAutomation,
    #[serde(rename = "CRM Platform")]
    CrmPlatform,
    #[serde(rename = "Email Marketing")]
    EmailMarketing,
    #[serde(rename = "PPC Advertising")]
    PpcAdvertising,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Analytics")]
    Analytics,
    #[serde(rename = "Content Management")]
    ContentManagement,
    #[serde(rename = "SEO Tools")]
    SeoTools,
}

impl ProductCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::MarketingAutomation => "Marketing Automation",
            ProductCategory::CrmPlatform => "CRM Platform",
            ProductCategory::EmailMarketing => "Email Marketing",
            ProductCategory::PpcAdvertising => "PPC Advertising",
            ProductCategory::SocialMedia => "Social Media",
            ProductCategory::Analytics => "Analytics",
            ProductCategory::ContentManagement => "Content Management",
            ProductCategory::SeoTools => "SEO Tools",
        }
    }

    /// What kind of product the model should assume it is promoting.
    pub fn product_kind_hint(self) -> &'static str {
        match self {
            ProductCategory::SocialMedia => "digital content (e.g., book or course)",
            _ => "SaaS tool or service",
        }
    }
}

/// A product a user wants marketing tool recommendations for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
}

/// Campaign fields embedded in content-generation prompts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub duration: String,
}

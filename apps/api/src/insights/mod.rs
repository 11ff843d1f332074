// Dashboard local insights: resolve a city, ask for products + trends, extract both arrays.
// Failures never reach the page; they become inline location text or empty lists.

pub mod geolocation;
pub mod handlers;
pub mod prompts;

use serde::Serialize;
use tracing::{debug, error};

use crate::extraction::{extract_array_pair_or_empty, ExtractedList, LiteralText};
use crate::insights::prompts::build_local_insights_prompt;
use crate::llm_client::LlmClient;
use crate::models::marketing::NamedCategorizedItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocalInsights {
    pub products: ExtractedList<NamedCategorizedItem>,
    pub trends: ExtractedList<String>,
}

/// One completion call for `city`. Transport and parse failures yield empty insights.
pub async fn fetch_local_insights(llm: &LlmClient, city: &str, country: &str) -> LocalInsights {
    let request = match build_local_insights_prompt(city, country) {
        Ok(request) => request,
        Err(e) => {
            error!("Could not build local insights prompt: {e}");
            return LocalInsights::default();
        }
    };

    let result = match llm.complete(&request).await {
        Ok(result) => result,
        Err(e) => {
            error!("Local insights completion failed: {e}");
            return LocalInsights::default();
        }
    };

    debug!("Local insights raw response: {}", result.raw_text);
    let (products, trends) =
        extract_array_pair_or_empty::<NamedCategorizedItem, LiteralText>(&result.raw_text);
    LocalInsights {
        products,
        trends: trends.into_iter().map(String::from).collect(),
    }
}

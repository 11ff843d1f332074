// Marketing tool recommendations for a user's product, returned as a numbered list.

pub mod handlers;
pub mod prompts;

use tracing::{debug, error, warn};

use crate::extraction::{extract_numbered_list, ExtractedList};
use crate::llm_client::LlmClient;
use crate::models::marketing::ProductDetails;
use crate::recommendations::prompts::build_tool_recommendation_prompt;

/// Failures of any kind produce an empty list.
pub async fn recommend_tools(llm: &LlmClient, product: &ProductDetails) -> ExtractedList<String> {
    let request = match build_tool_recommendation_prompt(product) {
        Ok(request) => request,
        Err(e) => {
            error!("Could not build recommendation prompt: {e}");
            return Vec::new();
        }
    };

    match llm.complete(&request).await {
        Ok(result) => {
            debug!("Recommendation raw response: {}", result.raw_text);
            if result.is_sentinel() {
                warn!("Recommendation response had no text, sentinel kept as a single entry");
            }
            extract_numbered_list(&result.raw_text)
        }
        Err(e) => {
            error!("Recommendation completion failed: {e}");
            Vec::new()
        }
    }
}

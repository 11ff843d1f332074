// Campaign content generation: ad copy, emails, posts and the like from campaign fields.

pub mod handlers;
pub mod prompts;

use tracing::debug;

use crate::campaigns::prompts::build_campaign_prompt;
use crate::extraction::clean_copy;
use crate::llm_client::{CompletionError, LlmClient};
use crate::models::marketing::CampaignDetails;

pub async fn generate_campaign_content(
    llm: &LlmClient,
    content_type: &str,
    details: &CampaignDetails,
) -> Result<String, CompletionError> {
    let request = build_campaign_prompt(content_type, details)?;
    let result = llm.complete(&request).await?;
    debug!("Campaign raw response: {}", result.raw_text);
    Ok(clean_copy(&result.raw_text))
}

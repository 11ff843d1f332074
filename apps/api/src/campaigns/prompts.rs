use crate::llm_client::prompts::{labeled_line, PLAIN_COPY_DIRECTIVE};
use crate::llm_client::{CompletionError, CompletionRequest};
use crate::models::marketing::CampaignDetails;

const CLOSING_INSTRUCTION: &str = "Keep it direct and structured, not list-based.";

/// Empty campaign fields still appear as labels with nothing after them.
pub fn build_campaign_prompt(
    content_type: &str,
    details: &CampaignDetails,
) -> Result<CompletionRequest, CompletionError> {
    let lines = [
        labeled_line("Campaign Title", &details.title),
        labeled_line("Description", &details.description),
        labeled_line("Target Audience", &details.target_audience),
        labeled_line("Budget", &details.budget),
        labeled_line("Duration", &details.duration),
    ];

    let prompt = format!(
        "You're an expert marketing AI. Generate a concise, creative {} based on the following campaign details.\n\n{}\n\n{}",
        content_type.trim(),
        lines.join("\n"),
        CLOSING_INSTRUCTION
    );

    Ok(CompletionRequest::new(prompt)?.with_directive(PLAIN_COPY_DIRECTIVE))
}

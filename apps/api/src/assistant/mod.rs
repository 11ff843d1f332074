// AI marketing assistant: direct answers, cleaned of bullet glyphs.

pub mod handlers;
pub mod prompts;

use tracing::debug;

use crate::assistant::prompts::build_assistant_prompt;
use crate::extraction::clean_prose;
use crate::llm_client::{CompletionError, LlmClient};

/// Answers one question. Transport failures propagate so the page can show them.
pub async fn answer_question(llm: &LlmClient, question: &str) -> Result<String, CompletionError> {
    let request = build_assistant_prompt(question)?;
    let result = llm.complete(&request).await?;
    debug!("Assistant raw response: {}", result.raw_text);
    Ok(clean_prose(&result.raw_text))
}

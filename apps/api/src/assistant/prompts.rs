use crate::llm_client::prompts::{ASSISTANT_ROLE, PLAIN_PROSE_DIRECTIVE};
use crate::llm_client::{CompletionError, CompletionRequest};

/// The question goes in verbatim after the role and prose directive.
pub fn build_assistant_prompt(question: &str) -> Result<CompletionRequest, CompletionError> {
    Ok(CompletionRequest::new(question)?
        .with_directive(ASSISTANT_ROLE)
        .with_directive(PLAIN_PROSE_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_prompt_layout() {
        let request = build_assistant_prompt("How do I grow my newsletter?").unwrap();
        assert_eq!(
            request.render(),
            "You're an AI Marketing Assistant. Respond concisely and clearly. \
             Avoid using markdown (*, -, etc), no bullet points, no headings. \
             Just give a brief and direct answer:\n\nHow do I grow my newsletter?"
        );
    }

    #[test]
    fn test_blank_question_rejected() {
        assert!(matches!(
            build_assistant_prompt("  "),
            Err(CompletionError::EmptyPrompt)
        ));
    }
}

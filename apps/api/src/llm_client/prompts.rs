// Shared prompt fragments.
// Each page that needs completions defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Role statement for direct-answer assistant replies.
pub const ASSISTANT_ROLE: &str = "You're an AI Marketing Assistant.";

/// Style directive for free-text prose. Used when no structured output is expected.
pub const PLAIN_PROSE_DIRECTIVE: &str = "Respond concisely and clearly. \
    Avoid using markdown (*, -, etc), no bullet points, no headings. \
    Just give a brief and direct answer:";

/// Style directive for long-form generated copy.
pub const PLAIN_COPY_DIRECTIVE: &str = "Avoid markdown formatting, bullet points, or emojis. \
    Write in plain, professional English.";

/// Renders one labeled plain-text line. Empty values stay as empty fragments.
pub fn labeled_line(label: &str, value: &str) -> String {
    format!("{label}: {}", value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_line_trims_value() {
        assert_eq!(labeled_line("Budget", "  $500 "), "Budget: $500");
    }

    #[test]
    fn test_labeled_line_keeps_empty_fragment() {
        assert_eq!(labeled_line("Duration", ""), "Duration: ");
    }

    #[test]
    fn test_prose_directive_forbids_markdown() {
        assert!(PLAIN_PROSE_DIRECTIVE.contains("no bullet points"));
        assert!(PLAIN_COPY_DIRECTIVE.contains("Avoid markdown"));
    }
}

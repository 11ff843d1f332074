//! Numbered-list extraction for tool recommendations.

use crate::extraction::normalize::normalize_list_line;
use crate::extraction::ExtractedList;

/// Splits on newlines, normalizes each line and drops the empty ones. Order is preserved.
///
/// Never fails. Text without markers comes back line by line, so the
/// "No response" sentinel yields a single `["No response"]` entry.
pub fn extract_numbered_list(raw: &str) -> ExtractedList<String> {
    raw.split('\n')
        .map(normalize_list_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::NO_RESPONSE_SENTINEL;

    #[test]
    fn test_numbered_list_with_blank_line() {
        let raw = "1. Tool One\n2. Tool Two\n\n3. Tool Three";
        assert_eq!(
            extract_numbered_list(raw),
            vec!["Tool One", "Tool Two", "Tool Three"]
        );
    }

    #[test]
    fn test_every_marked_line_yields_one_entry_in_order() {
        let names = ["HubSpot", "Mailchimp", "Hootsuite", "Canva", "Google Ads"];
        let raw = names
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{}.   {n}  ", i + 1))
            .collect::<Vec<_>>()
            .join("\n");

        let extracted = extract_numbered_list(&raw);
        assert_eq!(extracted.len(), names.len());
        assert_eq!(extracted, names);
    }

    #[test]
    fn test_sentinel_is_kept_as_single_line() {
        assert_eq!(
            extract_numbered_list(NO_RESPONSE_SENTINEL),
            vec!["No response".to_string()]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input_is_empty() {
        assert!(extract_numbered_list("").is_empty());
        assert!(extract_numbered_list("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_preamble_lines_are_kept() {
        let raw = "Here are five tools:\n1. Semrush\n2) Ahrefs";
        assert_eq!(
            extract_numbered_list(raw),
            vec!["Here are five tools:", "Semrush", "Ahrefs"]
        );
    }
}

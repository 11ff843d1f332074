//! Line-level text normalization, independent of how the text is split.

use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s*").expect("ordinal marker pattern is valid"));

/// Removes one leading ordinal marker such as `1.` or `12)` plus the whitespace after it.
/// The marker must start the line; indented markers are left alone.
pub fn strip_ordinal_marker(line: &str) -> &str {
    match ORDINAL_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Marker stripped first, then surrounding whitespace trimmed.
pub fn normalize_list_line(line: &str) -> &str {
    strip_ordinal_marker(line).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_dot_and_paren_markers() {
        assert_eq!(strip_ordinal_marker("1. HubSpot"), "HubSpot");
        assert_eq!(strip_ordinal_marker("12) Mailchimp"), "Mailchimp");
        assert_eq!(strip_ordinal_marker("3.Canva"), "Canva");
    }

    #[test]
    fn test_leaves_unmarked_lines_alone() {
        assert_eq!(strip_ordinal_marker("Buffer"), "Buffer");
        assert_eq!(strip_ordinal_marker("2024 plan"), "2024 plan");
        assert_eq!(strip_ordinal_marker("- Hootsuite"), "- Hootsuite");
    }

    #[test]
    fn test_only_first_marker_is_removed() {
        assert_eq!(strip_ordinal_marker("1. 2. Semrush"), "2. Semrush");
    }

    #[test]
    fn test_indented_marker_survives_trim() {
        // Stripping happens before trimming, so leading whitespace hides the marker.
        assert_eq!(normalize_list_line("  1. Ahrefs "), "1. Ahrefs");
    }

    #[test]
    fn test_normalize_trims_and_handles_carriage_return() {
        assert_eq!(normalize_list_line("4. Zapier  \r"), "Zapier");
        assert_eq!(normalize_list_line("5. "), "");
    }
}

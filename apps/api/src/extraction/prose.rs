//! Prose cleanup for direct-answer replies and campaign copy. Cosmetic only.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[*\-•]\s*").expect("bullet pattern is valid"));

static LEADING_BULLET_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[*\-•]+\s*").expect("bullet run pattern is valid"));

/// Strips one bullet glyph (`*`, `-`, `•`) at the start of every line, then trims the
/// whole text once. Interior indentation and line content are left as they are.
pub fn clean_prose(raw: &str) -> String {
    LEADING_BULLET.replace_all(raw, "").trim().to_string()
}

/// Like [`clean_prose`], but a run of glyphs goes at once. A `---` rule line is
/// removed together with the line break after it.
pub fn clean_copy(raw: &str) -> String {
    LEADING_BULLET_RUN.replace_all(raw, "").trim().to_string()
}

//! Structured multi-array extraction for the combined products + trends response.
//!
//! Candidate 1 is the first array literal that opens with an object.
//! Candidate 2 is the second array literal found when scanning for any bracketed span.
//! The positional pick assumes the model emits the object array first; prose that
//! contains its own brackets shifts the positions and fails or misattributes the extraction.
//!
//! The literal parse is the only check. Element types decode from any JSON value, so a
//! null or numeric field renders as text instead of rejecting the whole pair.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::warn;

use crate::extraction::ExtractedList;

static OBJECT_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*\{[\s\S]*?\}\s*\]").expect("object array pattern is valid"));

static ANY_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[\s\S]*?\]").expect("array pattern is valid"));

/// Display text for one literal: strings as-is, null as empty, anything else as JSON text.
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// An array element rendered as text whatever literal type the model emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct LiteralText(pub String);

impl From<Value> for LiteralText {
    fn from(value: Value) -> Self {
        LiteralText(literal_text(&value))
    }
}

impl From<LiteralText> for String {
    fn from(text: LiteralText) -> Self {
        text.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayPosition {
    First,
    Second,
}

impl fmt::Display for ArrayPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayPosition::First => f.write_str("first"),
            ArrayPosition::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionFailure {
    #[error("no array of objects found in response")]
    MissingObjectArray,

    #[error("fewer than two array literals found in response")]
    MissingSecondArray,

    #[error("{position} array literal is malformed: {source}")]
    Malformed {
        position: ArrayPosition,
        #[source]
        source: serde_json::Error,
    },
}

/// Locates and parses both candidates. Either both parse or the whole call fails.
pub fn extract_array_pair<T, U>(
    raw: &str,
) -> Result<(ExtractedList<T>, ExtractedList<U>), ExtractionFailure>
where
    T: DeserializeOwned,
    U: DeserializeOwned,
{
    let first = OBJECT_ARRAY.find(raw);
    let second = ANY_ARRAY.find_iter(raw).nth(1);

    let (first, second) = match (first, second) {
        (Some(f), Some(s)) => (f.as_str(), s.as_str()),
        (None, _) => return Err(ExtractionFailure::MissingObjectArray),
        (_, None) => return Err(ExtractionFailure::MissingSecondArray),
    };

    let first: Vec<T> =
        serde_json::from_str(first).map_err(|source| ExtractionFailure::Malformed {
            position: ArrayPosition::First,
            source,
        })?;
    let second: Vec<U> =
        serde_json::from_str(second).map_err(|source| ExtractionFailure::Malformed {
            position: ArrayPosition::Second,
            source,
        })?;

    Ok((first, second))
}

/// Same as [`extract_array_pair`], but a failure is logged and becomes two empty lists.
pub fn extract_array_pair_or_empty<T, U>(raw: &str) -> (ExtractedList<T>, ExtractedList<U>)
where
    T: DeserializeOwned,
    U: DeserializeOwned,
{
    match extract_array_pair(raw) {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Failed to parse structured completion response: {e}");
            (Vec::new(), Vec::new())
        }
    }
}

//! Response Extractor: turns raw model text into structured values for the pages.
//!
//! Three independent modes, chosen by the caller:
//! - `structured`: first object-array + second array literal embedded in prose (both-or-nothing)
//! - `numbered`: one entry per non-empty line, ordinal markers stripped
//! - `prose`: cosmetic removal of leading bullet glyphs (one per line, or a run for copy)
//!
//! Every mode is stateless and runs over the complete text. None of them panics or
//! propagates an error to the page; the structured mode degrades to empty lists.

pub mod normalize;
pub mod numbered;
pub mod prose;
pub mod structured;

pub use numbered::extract_numbered_list;
pub use prose::{clean_copy, clean_prose};
pub use structured::{extract_array_pair_or_empty, literal_text, LiteralText};

/// Ordered extraction output. May be empty; never stale.
pub type ExtractedList<T> = Vec<T>;

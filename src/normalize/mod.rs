//! Text normalization ahead of embedding.

mod error;


pub use error::NormalizeError;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::NormalizedText;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern compiles"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern compiles"));

/// Lowercases, replaces anything outside `[a-z0-9\s]` with a space, collapses
/// whitespace runs and trims.
///
/// Fails with [`NormalizeError::EmptyInput`] if `text` is blank or nothing survives
/// (e.g. input made only of punctuation).
pub fn normalize(text: &str) -> Result<NormalizedText, NormalizeError> {
    if text.trim().is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let lowered = text.to_lowercase();
    let cleaned = DISALLOWED_CHARS.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&cleaned, " ");
    let normalized = collapsed.trim();

    if normalized.is_empty() {
        debug!(input_len = text.len(), "Normalization removed all content");
        return Err(NormalizeError::EmptyInput);
    }

    Ok(NormalizedText::from_normalized(normalized.to_string()))
}

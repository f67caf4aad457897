//! Transient document values flowing through the pipeline.
//!
//! - [`Document`] is an uploaded payload tagged with its [`DocumentKind`].
//! - [`ExtractedText`] is what the extractor produced from it.
//! - [`NormalizedText`] is the cleaned form handed to the embedder.
//!
//! The text newtypes can only be built by the stage that guarantees their invariant,
//! so holding one is proof the invariant was checked.

#[cfg(test)]
mod tests;

use std::path::Path;

use serde::Serialize;

use crate::constants::{DEFAULT_MAX_DOCUMENT_BYTES, PREVIEW_ELLIPSIS};
use crate::extraction::ExtractionError;

/// Which side of the comparison a document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Candidate resume, uploaded as PDF.
    Resume,
    /// Job description, uploaded as plain text.
    JobDescription,
}

impl DocumentKind {
    /// Returns the label used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::JobDescription => "job_description",
        }
    }

    /// File extensions accepted for this kind (lowercase, without the dot).
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            DocumentKind::Resume => &["pdf"],
            DocumentKind::JobDescription => &["txt"],
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw uploaded payload.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("kind", &self.kind)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl Document {
    /// Wraps an in-memory payload. Size limits are enforced by the extractor.
    pub fn new(kind: DocumentKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }

    /// Reads a file, rejecting extensions not allowed for `kind` and files larger
    /// than [`DEFAULT_MAX_DOCUMENT_BYTES`].
    pub fn from_path<P: AsRef<Path>>(kind: DocumentKind, path: P) -> Result<Self, ExtractionError> {
        Self::from_path_with_limit(kind, path, DEFAULT_MAX_DOCUMENT_BYTES)
    }

    /// Reads a file, rejecting a disallowed extension or a size above `max_bytes`
    /// before any content is loaded.
    pub fn from_path_with_limit<P: AsRef<Path>>(
        kind: DocumentKind,
        path: P,
        max_bytes: u64,
    ) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if !kind.allowed_extensions().contains(&extension.as_str()) {
            return Err(ExtractionError::UnsupportedFileType {
                document: kind,
                extension,
            });
        }

        let read_failed = |e: std::io::Error| ExtractionError::ExtractionFailed {
            reason: format!("failed to read {}: {}", path.display(), e),
        };

        let size = std::fs::metadata(path).map_err(read_failed)?.len();
        if size > max_bytes {
            return Err(ExtractionError::OversizedDocument {
                size,
                limit: max_bytes,
            });
        }

        let bytes = std::fs::read(path).map_err(read_failed)?;

        Ok(Self::new(kind, bytes))
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Text recovered from a document; never empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Returns `None` when `text` is empty or whitespace-only.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Characters left after trimming surrounding whitespace.
    pub fn trimmed_char_count(&self) -> usize {
        self.0.trim().chars().count()
    }

    /// First `limit` characters, with an ellipsis when truncated.
    pub fn preview(&self, limit: usize) -> String {
        preview(&self.0, limit)
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercase `[a-z0-9 ]` text with single spaces and no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Only [`normalize`](crate::normalize::normalize) builds these.
    pub(crate) fn from_normalized(text: String) -> Self {
        debug_assert!(!text.is_empty());
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of space-separated words.
    pub fn word_count(&self) -> usize {
        self.0.split(' ').count()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the first `limit` characters of `text`, appending `...` if anything was cut.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + PREVIEW_ELLIPSIS.len());
            out.push_str(&text[..byte_idx]);
            out.push_str(PREVIEW_ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

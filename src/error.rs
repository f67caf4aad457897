//! Closed error taxonomy shared by every pipeline stage.

use serde::Serialize;

/// Tag identifying what went wrong, independent of which stage raised it.
///
/// Every module error maps onto exactly one kind via its `kind()` method, so callers
/// can branch on the failure without matching each module's enum. None of these are
/// retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Zero-byte payload or a PDF with no pages.
    EmptyDocument,
    /// Payload larger than the configured maximum.
    OversizedDocument,
    /// Parsed fine but yielded no usable text (e.g. scanned image PDF).
    NoReadableText,
    /// The parser or decoder failed outright.
    ExtractionFailed,
    /// Normalization or embedding received empty text.
    EmptyInput,
    /// The embedding model did not load at startup.
    ModelUnavailable,
    /// The model failed while encoding valid text.
    EmbeddingFailed,
}

impl ErrorKind {
    /// Returns the stable snake_case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyDocument => "empty_document",
            ErrorKind::OversizedDocument => "oversized_document",
            ErrorKind::NoReadableText => "no_readable_text",
            ErrorKind::ExtractionFailed => "extraction_failed",
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::ModelUnavailable => "model_unavailable",
            ErrorKind::EmbeddingFailed => "embedding_failed",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

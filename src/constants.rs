//! Cross-cutting, shared constants.
//!
//! Module configs take their defaults from here so the CLI, [`Config`](crate::Config)
//! and the per-module configs cannot drift apart.

/// Largest accepted upload, in bytes (10 MiB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Pretrained sentence encoder loaded when no local model directory is configured.
pub const DEFAULT_MODEL_ID: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Output dimension of [`DEFAULT_MODEL_ID`].
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token window used by the sentence-transformers packaging of MiniLM.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Scores at or above this percentage are a strong match.
pub const DEFAULT_STRONG_THRESHOLD: f64 = 70.0;

/// Scores at or above this percentage (and below strong) are a moderate match.
pub const DEFAULT_MODERATE_THRESHOLD: f64 = 50.0;

/// Word count below which a document is flagged as too short for a meaningful score.
pub const DEFAULT_MIN_WORD_COUNT: usize = 50;

/// Character count below which a resume PDF is flagged as a likely scanned image.
pub const DEFAULT_MIN_CHAR_COUNT: usize = 100;

/// Characters of extracted text shown in previews.
pub const DEFAULT_PREVIEW_CHAR_LIMIT: usize = 1000;

/// Suffix appended to truncated previews.
pub const PREVIEW_ELLIPSIS: &str = "...";

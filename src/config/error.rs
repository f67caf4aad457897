//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}': {reason}")]
    ParseError {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A boolean variable was not one of the accepted spellings.
    #[error("invalid boolean for {name}: '{value}' (expected true/false/1/0/yes/no)")]
    InvalidBool { name: &'static str, value: String },

    /// Encoding name not recognised.
    #[error("unknown text encoding '{name}' (expected utf-8, latin-1 or cp1252)")]
    UnknownEncoding { name: String },

    /// The encoding fallback list is empty.
    #[error("text encoding list cannot be empty")]
    EmptyEncodings,

    /// The document size limit is zero.
    #[error("max_document_bytes must be greater than 0")]
    ZeroMaxDocumentBytes,

    /// Thresholds are not finite or out of order.
    #[error("invalid thresholds: {reason}")]
    InvalidThresholds { reason: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

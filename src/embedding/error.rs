use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorKind;

/// Boxed underlying cause kept on [`EmbeddingError::EmbeddingFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Load failed at startup; the embedder refuses every call until restarted.
    #[error("embedding model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("cannot embed empty text")]
    EmptyInput,

    #[error("embedding failed during {context}: {source}")]
    EmbeddingFailed {
        context: &'static str,
        #[source]
        source: BoxError,
    },
}

impl EmbeddingError {
    pub(crate) fn failed(context: &'static str, source: impl Into<BoxError>) -> Self {
        EmbeddingError::EmbeddingFailed {
            context,
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EmbeddingError::ModelNotFound { .. }
            | EmbeddingError::ModelLoadFailed { .. }
            | EmbeddingError::InvalidConfig { .. }
            | EmbeddingError::ModelUnavailable { .. } => ErrorKind::ModelUnavailable,
            EmbeddingError::EmptyInput => ErrorKind::EmptyInput,
            EmbeddingError::EmbeddingFailed { .. } => ErrorKind::EmbeddingFailed,
        }
    }
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::failed("inference", err)
    }
}

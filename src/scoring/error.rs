use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("embedding dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cannot score an empty embedding")]
    EmptyEmbedding,

    #[error("cannot score a zero-norm embedding")]
    ZeroNorm,
}

impl ScoringError {
    /// Malformed embeddings are reported as an embedding failure.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::EmbeddingFailed
    }
}

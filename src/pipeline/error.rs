use serde::Serialize;
use thiserror::Error;

use crate::document::DocumentKind;
use crate::embedding::EmbeddingError;
use crate::error::ErrorKind;
use crate::extraction::ExtractionError;
use crate::normalize::NormalizeError;
use crate::scoring::ScoringError;

/// Pipeline stage that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Extraction,
    Normalization,
    Embedding,
    Scoring,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extraction => "extraction",
            Stage::Normalization => "normalization",
            Stage::Embedding => "embedding",
            Stage::Scoring => "scoring",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First failure of an evaluation, tagged with where it happened.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{document} extraction failed: {source}")]
    Extraction {
        document: DocumentKind,
        #[source]
        source: ExtractionError,
    },

    #[error("{document} normalization failed: {source}")]
    Normalization {
        document: DocumentKind,
        #[source]
        source: NormalizeError,
    },

    #[error("{document} embedding failed: {source}")]
    Embedding {
        document: DocumentKind,
        #[source]
        source: EmbeddingError,
    },

    #[error("scoring failed: {source}")]
    Scoring {
        #[source]
        source: ScoringError,
    },
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Extraction { .. } => Stage::Extraction,
            PipelineError::Normalization { .. } => Stage::Normalization,
            PipelineError::Embedding { .. } => Stage::Embedding,
            PipelineError::Scoring { .. } => Stage::Scoring,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Extraction { source, .. } => source.kind(),
            PipelineError::Normalization { source, .. } => source.kind(),
            PipelineError::Embedding { source, .. } => source.kind(),
            PipelineError::Scoring { source } => source.kind(),
        }
    }

    /// The document being processed, if the failure is tied to one.
    pub fn document(&self) -> Option<DocumentKind> {
        match self {
            PipelineError::Extraction { document, .. }
            | PipelineError::Normalization { document, .. }
            | PipelineError::Embedding { document, .. } => Some(*document),
            PipelineError::Scoring { .. } => None,
        }
    }
}

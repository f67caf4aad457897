//! Resume / job description matching library (used by the CLI and integration tests).
//!
//! A resume (PDF) and a job description (plain text) go through
//! extraction → normalization → embedding → cosine scoring → tier classification.
//!
//! # Public API Surface
//!
//! ## Entry point
//! - [`MatchPipeline`] - runs a full evaluation and returns an [`EvaluationResult`]
//!   or the first [`PipelineError`]
//! - [`Config`], [`ConfigError`] - environment-backed settings
//!
//! ## Stages
//! - [`TextExtractor`], [`PdfParser`], [`LopdfParser`] - PDF and plain-text extraction
//! - [`normalize`] - text cleaning
//! - [`SentenceEmbedder`], [`EmbedderConfig`] - sentence embeddings
//! - [`score`], [`classify`], [`MatchTier`] - similarity and tiers
//!
//! ## Errors
//! Each stage has its own error type; all of them map onto the closed [`ErrorKind`].
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extraction;
pub mod normalize;
pub mod pipeline;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use document::{Document, DocumentKind, ExtractedText, NormalizedText, preview};
pub use embedding::{EmbedderConfig, Embedding, EmbeddingError, SentenceEmbedder};
pub use error::ErrorKind;
#[cfg(any(test, feature = "mock"))]
pub use extraction::MockPdfParser;
pub use extraction::{
    ExtractionConfig, ExtractionError, LopdfParser, PageText, PdfParser, TextEncoding,
    TextExtractor,
};
pub use normalize::{NormalizeError, normalize};
pub use pipeline::{
    ContentWarning, EvaluationResult, MatchPipeline, PipelineError, ReportConfig, Stage,
    TextStats,
};
pub use scoring::{
    MatchTier, ScoringError, SimilarityScore, Thresholds, classify, cosine_similarity, score,
};

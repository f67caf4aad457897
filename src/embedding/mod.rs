//! Embedding + model utilities.
//!
//! - [`sentence`] provides the sentence embedder used by the pipeline.
//! - [`device`] and [`utils`] hold the device and model-file plumbing it shares.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Sentence embedder (BERT, mean pooled).
pub mod sentence;
mod types;
/// Tokenizer/model loading helpers.
pub mod utils;

pub use error::{BoxError, EmbeddingError};
pub use sentence::{EmbedderConfig, SentenceEmbedder};
pub use types::Embedding;

//! Similarity scoring and tier classification.
//!
//! [`score`] turns two embeddings into a percentage; [`classify`] buckets that
//! percentage into a [`MatchTier`].
//!
//! # Negative scores
//!
//! Cosine similarity lies in [-1, 1] and is **not** clamped before scaling. Sentence
//! embeddings of natural-language text are in practice positively correlated, so
//! scores land in [0, 100], but a pathological pair can come out slightly negative.
//! Such a score is returned as-is and classifies as [`MatchTier::Low`].

pub mod error;
pub mod scorer;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use scorer::{classify, cosine_similarity, score};
pub use types::{MatchTier, SimilarityScore, Thresholds};

use tracing::debug;

use crate::embedding::Embedding;

use super::error::ScoringError;
use super::types::{MatchTier, SimilarityScore};

/// Cosine similarity of two equal-length, non-zero vectors, accumulated in `f64`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, ScoringError> {
    if a.len() != b.len() {
        return Err(ScoringError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(ScoringError::EmptyEmbedding);
    }

    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Err(ScoringError::ZeroNorm);
    }

    Ok(dot / denom)
}

/// Scores two embeddings as a percentage (cosine × 100, 2 decimals, unclamped).
pub fn score(a: &Embedding, b: &Embedding) -> Result<SimilarityScore, ScoringError> {
    let cosine = cosine_similarity(a.as_slice(), b.as_slice())?;
    let score = SimilarityScore::from_cosine(cosine);

    debug!(cosine, score = score.value(), "Computed similarity score");

    Ok(score)
}

/// `Strong` if `score >= strong`, else `Moderate` if `score >= moderate`, else `Low`.
pub fn classify(score: f64, strong: f64, moderate: f64) -> MatchTier {
    if score >= strong {
        MatchTier::Strong
    } else if score >= moderate {
        MatchTier::Moderate
    } else {
        MatchTier::Low
    }
}

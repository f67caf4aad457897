use super::*;
use crate::embedding::{Embedding, SentenceEmbedder};
use crate::error::ErrorKind;
use crate::normalize::normalize;

#[test]
fn test_classify_examples() {
    assert_eq!(classify(85.0, 70.0, 50.0), MatchTier::Strong);
    assert_eq!(classify(60.0, 70.0, 50.0), MatchTier::Moderate);
    assert_eq!(classify(30.0, 70.0, 50.0), MatchTier::Low);
}

#[test]
fn test_classify_boundaries_are_inclusive() {
    assert_eq!(classify(70.0, 70.0, 50.0), MatchTier::Strong);
    assert_eq!(classify(69.99, 70.0, 50.0), MatchTier::Moderate);
    assert_eq!(classify(50.0, 70.0, 50.0), MatchTier::Moderate);
    assert_eq!(classify(49.99, 70.0, 50.0), MatchTier::Low);
}

#[test]
fn test_classify_negative_score_is_low() {
    assert_eq!(classify(-3.5, 70.0, 50.0), MatchTier::Low);
}

#[test]
fn test_classify_custom_thresholds() {
    assert_eq!(classify(65.0, 60.0, 40.0), MatchTier::Strong);
    assert_eq!(classify(45.0, 60.0, 40.0), MatchTier::Moderate);

    let thresholds = Thresholds::new(90.0, 80.0);
    assert_eq!(
        MatchTier::classify(SimilarityScore::from_percent(85.0), &thresholds),
        MatchTier::Moderate
    );
}

#[test]
fn test_match_tier_labels_and_feedback() {
    assert_eq!(MatchTier::Strong.as_str(), "strong");
    assert_eq!(MatchTier::Moderate.to_string(), "moderate");
    assert_eq!(MatchTier::Low.as_str(), "low");
    assert!(MatchTier::Strong.feedback().starts_with("Strong match"));
    assert!(MatchTier::Moderate.feedback().contains("skills may be missing"));
    assert!(MatchTier::Low.feedback().contains("significant gaps"));
}

#[test]
fn test_thresholds_default_and_validate() {
    let thresholds = Thresholds::default();
    assert_eq!(thresholds.strong, 70.0);
    assert_eq!(thresholds.moderate, 50.0);
    assert!(thresholds.validate().is_ok());

    assert!(Thresholds::new(50.0, 50.0).validate().is_ok());
    assert!(Thresholds::new(40.0, 50.0).validate().is_err());
    assert!(Thresholds::new(f64::NAN, 50.0).validate().is_err());
    assert!(Thresholds::new(70.0, f64::INFINITY).validate().is_err());
}

#[test]
fn test_similarity_score_rounding() {
    assert_eq!(SimilarityScore::from_cosine(0.123456).value(), 12.35);
    assert_eq!(SimilarityScore::from_cosine(1.0).value(), 100.0);
    assert_eq!(SimilarityScore::from_percent(66.664).value(), 66.66);
    assert_eq!(SimilarityScore::from_percent(42.0).to_string(), "42.00%");
}

#[test]
fn test_cosine_identical_vectors() {
    let v = [0.3f32, -0.2, 0.9];
    let cos = cosine_similarity(&v, &v).unwrap();
    assert!((cos - 1.0).abs() < 1e-9);
}

#[test]
fn test_cosine_is_magnitude_independent() {
    let a = [1.0f32, 2.0, 3.0];
    let b = [2.0f32, 4.0, 6.0];
    assert!((cosine_similarity(&a, &b).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn test_cosine_orthogonal_and_opposite() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
    assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap() + 1.0).abs() < 1e-9);
}

#[test]
fn test_cosine_rejects_malformed_input() {
    assert_eq!(
        cosine_similarity(&[1.0, 0.0], &[1.0]),
        Err(ScoringError::DimensionMismatch { left: 2, right: 1 })
    );
    assert_eq!(cosine_similarity(&[], &[]), Err(ScoringError::EmptyEmbedding));
    assert_eq!(
        cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]),
        Err(ScoringError::ZeroNorm)
    );
    assert_eq!(ScoringError::ZeroNorm.kind(), ErrorKind::EmbeddingFailed);
}

#[test]
fn test_score_is_not_clamped() {
    let a = Embedding::new(vec![1.0, 0.2]);
    let b = Embedding::new(vec![-1.0, 0.1]);

    let s = score(&a, &b).unwrap();
    assert!(s.value() < 0.0, "negative similarity must be surfaced");
    assert_eq!(
        MatchTier::classify(s, &Thresholds::default()),
        MatchTier::Low
    );
}

#[test]
fn test_self_similarity_is_maximal() {
    let embedder = SentenceEmbedder::stub();
    let texts = [
        "experienced software engineer skilled in python and distributed systems",
        "professional chef with 10 years in french cuisine",
        "x",
    ];

    for text in texts {
        let normalized = normalize(text).unwrap();
        let a = embedder.embed(normalized.as_str()).unwrap();
        let b = embedder.embed(normalized.as_str()).unwrap();
        let s = score(&a, &b).unwrap();
        assert!((s.value() - 100.0).abs() < 0.01, "got {s} for {text:?}");
    }
}

//! Evaluations against the real sentence encoder.
//!
//! Run with: `RESUME_MATCH_MODEL_PATH=/path/to/all-MiniLM-L6-v2 cargo test --test real_model_tests -- --ignored`
//! Without the variable the model is downloaded from the hub.

mod common;

use std::sync::Arc;

use resume_match::{Config, EmbedderConfig, MatchPipeline, MatchTier, SentenceEmbedder};

use common::fixtures::{
    CHEF_RESUME, CHEF_RESUME_SHORT, CLOUD_ENGINEER_JD, ENGINEER_JD, ENGINEER_RESUME,
    ENGINEER_RESUME_SHORT, text_pdf,
};

fn real_pipeline() -> MatchPipeline {
    let config = Config {
        model_path: std::env::var("RESUME_MATCH_MODEL_PATH").ok().map(Into::into),
        min_word_count: 1,
        min_char_count: 1,
        ..Default::default()
    };
    let embedder = SentenceEmbedder::try_load(config.embedder_config()).expect("Should load model");
    assert!(embedder.has_model());
    MatchPipeline::from_config(&config, Arc::new(embedder)).expect("valid config")
}

#[test]
#[ignore]
fn test_real_engineer_resume_is_not_low() {
    let result = real_pipeline()
        .evaluate_bytes(text_pdf(ENGINEER_RESUME), ENGINEER_JD.as_bytes())
        .expect("evaluation should succeed");

    assert_ne!(result.tier, MatchTier::Low, "score was {}", result.score);
}

#[test]
#[ignore]
fn test_real_chef_scores_below_engineer() {
    let pipeline = real_pipeline();

    let engineer = pipeline
        .evaluate_bytes(text_pdf(ENGINEER_RESUME), ENGINEER_JD.as_bytes())
        .unwrap();
    let chef = pipeline
        .evaluate_bytes(text_pdf(CHEF_RESUME), ENGINEER_JD.as_bytes())
        .unwrap();

    assert!(
        chef.score < engineer.score,
        "chef {} vs engineer {}",
        chef.score,
        engineer.score
    );
}

#[test]
#[ignore]
fn test_real_one_line_resumes_land_in_expected_tiers() {
    let pipeline = real_pipeline();

    let engineer = pipeline
        .evaluate_bytes(text_pdf(ENGINEER_RESUME_SHORT), CLOUD_ENGINEER_JD.as_bytes())
        .expect("engineer evaluation");
    let chef = pipeline
        .evaluate_bytes(text_pdf(CHEF_RESUME_SHORT), CLOUD_ENGINEER_JD.as_bytes())
        .expect("chef evaluation");

    assert_ne!(engineer.tier, MatchTier::Low, "engineer scored {}", engineer.score);
    assert_eq!(chef.tier, MatchTier::Low, "chef scored {}", chef.score);
    assert!(chef.score.value() < 50.0, "chef scored {}", chef.score);
    assert!(chef.score < engineer.score);
}

#[test]
#[ignore]
fn test_real_self_similarity_is_maximal() {
    let result = real_pipeline()
        .evaluate_bytes(text_pdf(ENGINEER_JD), ENGINEER_JD.as_bytes())
        .unwrap();

    assert!(result.score.value() > 99.0, "score was {}", result.score);
    assert_eq!(result.tier, MatchTier::Strong);
}

#[test]
#[ignore]
fn test_real_repeated_evaluation_is_deterministic() {
    let pipeline = real_pipeline();

    let first = pipeline
        .evaluate_bytes(text_pdf(ENGINEER_RESUME), ENGINEER_JD.as_bytes())
        .unwrap();
    let second = pipeline
        .evaluate_bytes(text_pdf(ENGINEER_RESUME), ENGINEER_JD.as_bytes())
        .unwrap();

    assert_eq!(first.score, second.score);
}

#[test]
fn test_missing_model_dir_is_unavailable() {
    let embedder = SentenceEmbedder::load(EmbedderConfig::new("/nonexistent/model/dir"));
    assert!(!embedder.is_available());
    assert!(embedder.unavailable_reason().is_some());
}

use serde::Serialize;

use crate::constants::{DEFAULT_MODERATE_THRESHOLD, DEFAULT_STRONG_THRESHOLD};

/// Cosine similarity scaled to a percentage and rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Scales a raw cosine similarity to a percentage. Negative input is kept.
    pub fn from_cosine(cosine: f64) -> Self {
        Self::from_percent(cosine * 100.0)
    }

    /// Rounds `percent` to 2 decimal places.
    pub fn from_percent(percent: f64) -> Self {
        Self((percent * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl From<SimilarityScore> for f64 {
    fn from(score: SimilarityScore) -> Self {
        score.0
    }
}

/// Qualitative bucket for a [`SimilarityScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Low,
}

impl MatchTier {
    /// Buckets `score` using inclusive lower bounds.
    pub fn classify(score: SimilarityScore, thresholds: &Thresholds) -> Self {
        super::scorer::classify(score.value(), thresholds.strong, thresholds.moderate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Strong => "strong",
            MatchTier::Moderate => "moderate",
            MatchTier::Low => "low",
        }
    }

    /// One-line guidance shown next to the score.
    pub fn feedback(&self) -> &'static str {
        match self {
            MatchTier::Strong => "Strong match! The resume aligns well with the JD.",
            MatchTier::Moderate => "Moderate match - some skills may be missing.",
            MatchTier::Low => "Low match - significant gaps with the JD.",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds (inclusive, in percent) for the strong and moderate tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub strong: f64,
    pub moderate: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strong: DEFAULT_STRONG_THRESHOLD,
            moderate: DEFAULT_MODERATE_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(strong: f64, moderate: f64) -> Self {
        Self { strong, moderate }
    }

    /// Both thresholds must be finite and `moderate <= strong`.
    pub fn validate(&self) -> Result<(), String> {
        if !self.strong.is_finite() || !self.moderate.is_finite() {
            return Err(format!(
                "thresholds must be finite, got strong={} moderate={}",
                self.strong, self.moderate
            ));
        }

        if self.moderate > self.strong {
            return Err(format!(
                "moderate threshold ({}) must not exceed strong threshold ({})",
                self.moderate, self.strong
            ));
        }

        Ok(())
    }
}

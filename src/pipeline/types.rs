use serde::Serialize;

use crate::document::{DocumentKind, ExtractedText, NormalizedText};
use crate::scoring::{MatchTier, SimilarityScore};

/// Settings that shape the result but not the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub min_word_count: usize,
    pub min_char_count: usize,
    pub preview_char_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        use crate::constants::{
            DEFAULT_MIN_CHAR_COUNT, DEFAULT_MIN_WORD_COUNT, DEFAULT_PREVIEW_CHAR_LIMIT,
        };

        Self {
            min_word_count: DEFAULT_MIN_WORD_COUNT,
            min_char_count: DEFAULT_MIN_CHAR_COUNT,
            preview_char_limit: DEFAULT_PREVIEW_CHAR_LIMIT,
        }
    }
}

/// Non-fatal content problems surfaced alongside the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentWarning {
    /// The resume yielded very little text; it is probably an image-only PDF.
    LikelyScanned { char_count: usize, minimum: usize },
    /// A document has fewer words than recommended for a meaningful comparison.
    LowWordCount {
        document: DocumentKind,
        word_count: usize,
        minimum: usize,
    },
}

impl ContentWarning {
    pub fn document(&self) -> DocumentKind {
        match self {
            ContentWarning::LikelyScanned { .. } => DocumentKind::Resume,
            ContentWarning::LowWordCount { document, .. } => *document,
        }
    }
}

impl std::fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentWarning::LikelyScanned { char_count, .. } => write!(
                f,
                "resume contains very little text ({char_count} characters); it may be a scanned image"
            ),
            ContentWarning::LowWordCount {
                document,
                word_count,
                minimum,
            } => write!(
                f,
                "{document} contains very few words ({word_count}); minimum recommended: {minimum}"
            ),
        }
    }
}

/// Size of one document at the extraction and normalization stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Characters of the extracted text after trimming.
    pub char_count: usize,
    /// Words in the normalized text.
    pub word_count: usize,
}

impl TextStats {
    pub fn measure(extracted: &ExtractedText, normalized: &NormalizedText) -> Self {
        Self {
            char_count: extracted.trimmed_char_count(),
            word_count: normalized.word_count(),
        }
    }
}

/// Everything produced by a successful evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub score: SimilarityScore,
    pub tier: MatchTier,
    pub resume_text: ExtractedText,
    pub job_description_text: ExtractedText,
    pub resume_stats: TextStats,
    pub job_description_stats: TextStats,
    pub warnings: Vec<ContentWarning>,
    pub resume_preview: String,
    pub job_description_preview: String,
}

impl EvaluationResult {
    pub fn feedback(&self) -> &'static str {
        self.tier.feedback()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

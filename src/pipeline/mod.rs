//! End-to-end resume / job description evaluation.
//!
//! [`MatchPipeline::evaluate`] runs extraction, normalization, embedding, scoring and
//! classification in that order and stops at the first failure. The pipeline holds no
//! per-call state; one instance can serve any number of evaluations, and the embedder
//! is shared through an `Arc`.

pub mod error;
pub mod types;


pub use error::{PipelineError, Stage};
pub use types::{ContentWarning, EvaluationResult, ReportConfig, TextStats};

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::config::{Config, ConfigError};
use crate::document::{Document, DocumentKind, ExtractedText, NormalizedText, preview};
use crate::embedding::{Embedding, SentenceEmbedder};
use crate::extraction::{ExtractionError, LopdfParser, PdfParser, TextExtractor};
use crate::normalize::normalize;
use crate::scoring::{MatchTier, Thresholds, score};

pub struct MatchPipeline<P: PdfParser = LopdfParser> {
    extractor: TextExtractor<P>,
    embedder: Arc<SentenceEmbedder>,
    thresholds: Thresholds,
    report: ReportConfig,
}

impl<P: PdfParser> std::fmt::Debug for MatchPipeline<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchPipeline")
            .field("extraction", self.extractor.config())
            .field("embedder", &self.embedder)
            .field("thresholds", &self.thresholds)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

impl MatchPipeline<LopdfParser> {
    /// Builds a pipeline with the lopdf backend from a validated [`Config`].
    pub fn from_config(config: &Config, embedder: Arc<SentenceEmbedder>) -> Result<Self, ConfigError> {
        Self::from_config_with_parser(LopdfParser::new(), config, embedder)
    }
}

impl<P: PdfParser> MatchPipeline<P> {
    pub fn from_config_with_parser(
        parser: P,
        config: &Config,
        embedder: Arc<SentenceEmbedder>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let report = ReportConfig {
            min_word_count: config.min_word_count,
            min_char_count: config.min_char_count,
            preview_char_limit: config.preview_char_limit,
        };

        Ok(Self::new(
            TextExtractor::with_parser(parser, config.extraction_config()),
            embedder,
            config.thresholds(),
            report,
        ))
    }

    pub fn new(
        extractor: TextExtractor<P>,
        embedder: Arc<SentenceEmbedder>,
        thresholds: Thresholds,
        report: ReportConfig,
    ) -> Self {
        Self {
            extractor,
            embedder,
            thresholds,
            report,
        }
    }

    pub fn extractor(&self) -> &TextExtractor<P> {
        &self.extractor
    }

    pub fn embedder(&self) -> &Arc<SentenceEmbedder> {
        &self.embedder
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn report_config(&self) -> &ReportConfig {
        &self.report
    }

    /// Evaluates raw uploads: `resume` as PDF bytes, `job_description` as text bytes.
    pub fn evaluate_bytes(
        &self,
        resume: impl Into<Vec<u8>>,
        job_description: impl Into<Vec<u8>>,
    ) -> Result<EvaluationResult, PipelineError> {
        let resume = Document::new(DocumentKind::Resume, resume);
        let job_description = Document::new(DocumentKind::JobDescription, job_description);
        self.evaluate(&resume, &job_description)
    }

    /// Scores `resume` against `job_description`.
    ///
    /// The first failing stage aborts the evaluation; no partial result is returned.
    #[instrument(
        skip(self, resume, job_description),
        fields(resume_bytes = resume.size(), jd_bytes = job_description.size())
    )]
    pub fn evaluate(
        &self,
        resume: &Document,
        job_description: &Document,
    ) -> Result<EvaluationResult, PipelineError> {
        let resume_text = self.extract_document(resume, DocumentKind::Resume)?;
        let jd_text = self.extract_document(job_description, DocumentKind::JobDescription)?;

        let resume_clean = Self::normalize_text(&resume_text, DocumentKind::Resume)?;
        let jd_clean = Self::normalize_text(&jd_text, DocumentKind::JobDescription)?;

        let resume_embedding = self.embed_text(&resume_clean, DocumentKind::Resume)?;
        let jd_embedding = self.embed_text(&jd_clean, DocumentKind::JobDescription)?;

        let similarity = score(&resume_embedding, &jd_embedding)
            .map_err(|source| PipelineError::Scoring { source })?;
        let tier = MatchTier::classify(similarity, &self.thresholds);

        let resume_stats = TextStats::measure(&resume_text, &resume_clean);
        let jd_stats = TextStats::measure(&jd_text, &jd_clean);
        let warnings = self.content_warnings(&resume_stats, &jd_stats);

        info!(
            score = similarity.value(),
            tier = tier.as_str(),
            warnings = warnings.len(),
            "Evaluation complete"
        );

        Ok(EvaluationResult {
            score: similarity,
            tier,
            resume_preview: preview(resume_text.as_str(), self.report.preview_char_limit),
            job_description_preview: preview(jd_text.as_str(), self.report.preview_char_limit),
            resume_text,
            job_description_text: jd_text,
            resume_stats,
            job_description_stats: jd_stats,
            warnings,
        })
    }

    fn extract_document(
        &self,
        document: &Document,
        expected: DocumentKind,
    ) -> Result<ExtractedText, PipelineError> {
        let result = if document.kind() == expected {
            self.extractor.extract(document)
        } else {
            Err(ExtractionError::ExtractionFailed {
                reason: format!("expected a {expected} document, got {}", document.kind()),
            })
        };

        let text = result.map_err(|source| PipelineError::Extraction {
            document: expected,
            source,
        })?;

        debug!(
            document = %expected,
            chars = text.trimmed_char_count(),
            "Extracted text"
        );

        Ok(text)
    }

    fn normalize_text(
        text: &ExtractedText,
        document: DocumentKind,
    ) -> Result<NormalizedText, PipelineError> {
        let clean = normalize(text.as_str())
            .map_err(|source| PipelineError::Normalization { document, source })?;

        debug!(document = %document, words = clean.word_count(), "Normalized text");

        Ok(clean)
    }

    fn embed_text(
        &self,
        text: &NormalizedText,
        document: DocumentKind,
    ) -> Result<Embedding, PipelineError> {
        let embedding = self
            .embedder
            .embed(text.as_str())
            .map_err(|source| PipelineError::Embedding { document, source })?;

        debug!(document = %document, dims = embedding.dimensions(), "Embedded text");

        Ok(embedding)
    }

    fn content_warnings(&self, resume: &TextStats, jd: &TextStats) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();

        if resume.char_count < self.report.min_char_count {
            warnings.push(ContentWarning::LikelyScanned {
                char_count: resume.char_count,
                minimum: self.report.min_char_count,
            });
        }

        for (document, stats) in [
            (DocumentKind::Resume, resume),
            (DocumentKind::JobDescription, jd),
        ] {
            if stats.word_count < self.report.min_word_count {
                warnings.push(ContentWarning::LowWordCount {
                    document,
                    word_count: stats.word_count,
                    minimum: self.report.min_word_count,
                });
            }
        }

        for warning in &warnings {
            warn!(document = %warning.document(), "{warning}");
        }

        warnings
    }
}

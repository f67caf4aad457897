//! Text extraction from uploaded payloads.
//!
//! [`TextExtractor`] turns raw bytes into [`ExtractedText`]: PDF payloads go through a
//! [`PdfParser`] (production: [`LopdfParser`]), plain-text payloads through an ordered
//! list of [`TextEncoding`]s. Both paths guard against empty and oversized input before
//! touching the payload.

pub mod encoding;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod pdf;


pub use encoding::{DEFAULT_TEXT_ENCODINGS, TextEncoding, decode_with_fallback};
pub use error::ExtractionError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockPdfParser;
pub use pdf::{LopdfParser, PageText, PdfParser};

use tracing::{debug, info};

use crate::constants::DEFAULT_MAX_DOCUMENT_BYTES;
use crate::document::{Document, DocumentKind, ExtractedText};

/// Configuration for [`TextExtractor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Largest payload accepted, in bytes.
    pub max_document_bytes: u64,
    /// Decode order for plain text; the last entry is decoded lossily.
    pub text_encodings: Vec<TextEncoding>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            text_encodings: DEFAULT_TEXT_ENCODINGS.to_vec(),
        }
    }
}

/// Extracts text from PDF and plain-text payloads.
#[derive(Debug, Clone)]
pub struct TextExtractor<P: PdfParser = LopdfParser> {
    parser: P,
    config: ExtractionConfig,
}

impl TextExtractor<LopdfParser> {
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_parser(LopdfParser::new(), config)
    }
}

impl Default for TextExtractor<LopdfParser> {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl<P: PdfParser> TextExtractor<P> {
    pub fn with_parser(parser: P, config: ExtractionConfig) -> Self {
        Self { parser, config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Extracts a document using the format its kind implies (resume: PDF, JD: text).
    pub fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        match document.kind() {
            DocumentKind::Resume => self.extract_pdf(document.bytes()),
            DocumentKind::JobDescription => self.extract_plain_text(document.bytes()),
        }
    }

    /// Concatenates the text of every page of a PDF.
    pub fn extract_pdf(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.check_size(bytes)?;

        let pages = self.parser.pages(bytes)?;
        if pages.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let page_count = pages.len();
        let mut pages_with_text = 0usize;
        let mut text = String::new();

        for page in pages {
            let Some(page_text) = page.text.filter(|t| !t.trim().is_empty()) else {
                debug!(page = page.number, "Page contributed no text");
                continue;
            };
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&page_text);
            pages_with_text += 1;
        }

        info!(page_count, pages_with_text, "PDF text extraction complete");

        ExtractedText::new(text).ok_or(ExtractionError::NoReadableText)
    }

    /// Decodes a plain-text payload with the configured encoding fallbacks.
    pub fn extract_plain_text(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.check_size(bytes)?;

        let (text, encoding) = decode_with_fallback(bytes, &self.config.text_encodings)?;

        info!(encoding = %encoding, bytes = bytes.len(), "Plain text decoded");

        ExtractedText::new(text).ok_or(ExtractionError::NoReadableText)
    }

    fn check_size(&self, bytes: &[u8]) -> Result<(), ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let size = bytes.len() as u64;
        if size > self.config.max_document_bytes {
            return Err(ExtractionError::OversizedDocument {
                size,
                limit: self.config.max_document_bytes,
            });
        }

        Ok(())
    }
}

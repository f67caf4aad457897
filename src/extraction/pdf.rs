use lopdf::Document as PdfDocument;
use tracing::debug;

use super::error::ExtractionError;

/// Text pulled from a single PDF page (`None` when the page had no text layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number.
    pub number: u32,
    pub text: Option<String>,
}

impl PageText {
    pub fn new(number: u32, text: Option<String>) -> Self {
        Self { number, text }
    }
}

/// Opens a PDF payload and exposes the text of each page.
///
/// Implementations return an error only for structural failures (corrupt file,
/// encryption); a page whose text cannot be read is reported as `text: None`.
pub trait PdfParser: Send + Sync {
    fn pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, ExtractionError>;
}

/// [`PdfParser`] backed by `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfParser;

impl LopdfParser {
    pub fn new() -> Self {
        Self
    }
}

impl PdfParser for LopdfParser {
    fn pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, ExtractionError> {
        let doc = PdfDocument::load_mem(bytes)?;

        if doc.is_encrypted() {
            return Err(ExtractionError::ExtractionFailed {
                reason: "PDF is encrypted".to_string(),
            });
        }

        let pages = doc
            .get_pages()
            .into_keys()
            .map(|number| match doc.extract_text(&[number]) {
                Ok(text) => PageText::new(number, Some(text)),
                Err(e) => {
                    debug!(page = number, error = %e, "Page has no extractable text");
                    PageText::new(number, None)
                }
            })
            .collect();

        Ok(pages)
    }
}

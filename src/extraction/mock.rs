//! Scripted PDF parser for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::ExtractionError;
use super::pdf::{PageText, PdfParser};

#[derive(Debug, Clone)]
enum MockOutcome {
    Pages(Vec<Option<String>>),
    Fail(String),
}

/// [`PdfParser`] that ignores the payload and returns preset pages.
#[derive(Debug, Clone)]
pub struct MockPdfParser {
    outcome: MockOutcome,
    calls: Arc<AtomicUsize>,
}

impl MockPdfParser {
    /// Every call yields these page texts, numbered from 1.
    pub fn with_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            outcome: MockOutcome::Pages(pages.into_iter().map(|p| p.map(Into::into)).collect()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Single page containing `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_pages([Some(text.into())])
    }

    /// Every call fails as a corrupt file would.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Fail(reason.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times [`PdfParser::pages`] was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PdfParser for MockPdfParser {
    fn pages(&self, _bytes: &[u8]) -> Result<Vec<PageText>, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Pages(pages) => Ok(pages
                .iter()
                .enumerate()
                .map(|(i, text)| PageText::new(i as u32 + 1, text.clone()))
                .collect()),
            MockOutcome::Fail(reason) => Err(ExtractionError::ExtractionFailed {
                reason: reason.clone(),
            }),
        }
    }
}

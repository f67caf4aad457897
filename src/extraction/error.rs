use thiserror::Error;

use crate::document::DocumentKind;
use crate::error::ErrorKind;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("document is {size} bytes, exceeding the {limit} byte limit")]
    OversizedDocument { size: u64, limit: u64 },

    #[error("no readable text found in document")]
    NoReadableText,

    #[error("text extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("unsupported file type '.{extension}' for {document}")]
    UnsupportedFileType {
        document: DocumentKind,
        extension: String,
    },
}

impl ExtractionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractionError::EmptyDocument => ErrorKind::EmptyDocument,
            ExtractionError::OversizedDocument { .. } => ErrorKind::OversizedDocument,
            ExtractionError::NoReadableText => ErrorKind::NoReadableText,
            ExtractionError::ExtractionFailed { .. }
            | ExtractionError::UnsupportedFileType { .. } => ErrorKind::ExtractionFailed,
        }
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        ExtractionError::ExtractionFailed {
            reason: format!("failed to parse PDF: {}", err),
        }
    }
}

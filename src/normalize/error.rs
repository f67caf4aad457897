use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("text is empty or contains no alphanumeric content")]
    EmptyInput,
}

impl NormalizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizeError::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

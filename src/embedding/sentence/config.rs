use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_MODEL_ID};
use crate::embedding::error::EmbeddingError;

#[derive(Debug, Clone, PartialEq)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
pub struct EmbedderConfig {
    /// Local directory holding `config.json`, `tokenizer.json` and `model.safetensors`.
    /// When unset the model is fetched from the hub by `model_id`.
    pub model_path: Option<PathBuf>,
    /// Hub identifier of the pretrained encoder.
    pub model_id: String,
    /// Max tokens fed to the encoder; longer inputs are truncated.
    pub max_seq_len: usize,
    /// Output dimension in stub mode (the real model reports its own).
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl EmbedderConfig {
    /// Loads the encoder from a local model directory.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    /// Downloads the encoder by hub id.
    pub fn from_hub(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than 0".to_string(),
            });
        }

        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than 0".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        match &self.model_path {
            Some(path) if path.as_os_str().is_empty() => Err(EmbeddingError::InvalidConfig {
                reason: "model_path cannot be empty when provided".to_string(),
            }),
            Some(_) => Ok(()),
            None if self.model_id.trim().is_empty() => Err(EmbeddingError::InvalidConfig {
                reason: "either model_path or model_id is required".to_string(),
            }),
            None => Ok(()),
        }
    }
}

//! Sentence embedder (BERT + tokenizer, mean pooled).
//!
//! Build one [`SentenceEmbedder`] at startup and share it (`Arc`) across evaluations.
//! Load failures are recorded rather than retried: an embedder that failed to load
//! answers every [`SentenceEmbedder::embed`] call with
//! [`EmbeddingError::ModelUnavailable`]. Use [`EmbedderConfig::stub`] for tests and
//! examples without model files.

/// Sentence embedder configuration.
pub mod config;
pub(crate) mod model;
mod stub;


pub use config::EmbedderConfig;

use tracing::{debug, error, info, warn};

use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::types::Embedding;
use crate::embedding::utils::ModelFiles;

use model::SentenceEncoder;

enum EmbedderBackend {
    Model { encoder: SentenceEncoder },
    Stub,
    Unavailable { reason: String },
}

/// Text → fixed-length vector, backed by a pretrained encoder (or a stub).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
    embedding_dim: usize,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { encoder } => format!("Model({:?})", encoder.device()),
                    EmbedderBackend::Stub => "Stub".to_string(),
                    EmbedderBackend::Unavailable { reason } => format!("Unavailable({reason})"),
                },
            )
            .field("embedding_dim", &self.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder, recording any failure instead of returning it.
    ///
    /// The returned embedder is always usable as a value; check
    /// [`is_available`](Self::is_available) or handle `ModelUnavailable` from `embed`.
    pub fn load(config: EmbedderConfig) -> Self {
        match Self::try_load(config.clone()) {
            Ok(embedder) => embedder,
            Err(e) => {
                error!(error = %e, "Embedding model failed to load; embedding disabled until restart");
                Self::unavailable(config, e.to_string())
            }
        }
    }

    /// Loads the embedder, returning the load error to the caller.
    pub fn try_load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                embedding_dim: config.embedding_dim,
                config,
            });
        }

        let files = match &config.model_path {
            Some(path) => ModelFiles::from_dir(path)?,
            None => {
                info!(model_id = %config.model_id, "Resolving embedding model from hub");
                ModelFiles::from_hub(&config.model_id)?
            }
        };

        let device = select_device();
        debug!(?device, "Selected compute device for sentence embedder");

        let encoder = SentenceEncoder::load(&files, config.max_seq_len, device)?;
        let embedding_dim = encoder.hidden_size();

        info!(
            weights = %files.weights.display(),
            embedding_dim,
            "Sentence embedder loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model { encoder },
            config,
            embedding_dim,
        })
    }

    /// Deterministic stub embedder.
    pub fn stub() -> Self {
        let config = EmbedderConfig::stub();
        Self {
            backend: EmbedderBackend::Stub,
            embedding_dim: config.embedding_dim,
            config,
        }
    }

    /// An embedder whose model failed to load; every `embed` call fails fast.
    pub fn unavailable(config: EmbedderConfig, reason: impl Into<String>) -> Self {
        Self {
            backend: EmbedderBackend::Unavailable {
                reason: reason.into(),
            },
            embedding_dim: config.embedding_dim,
            config,
        }
    }

    /// Embeds a single piece of text.
    pub fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let values = match &self.backend {
            EmbedderBackend::Unavailable { reason } => {
                return Err(EmbeddingError::ModelUnavailable {
                    reason: reason.clone(),
                });
            }
            _ if text.trim().is_empty() => return Err(EmbeddingError::EmptyInput),
            EmbedderBackend::Model { encoder } => encoder.encode(text)?,
            EmbedderBackend::Stub => {
                debug!(text_len = text.len(), "Generating stub embedding");
                stub::hashed_embedding(text, self.embedding_dim)
            }
        };

        if values.len() != self.embedding_dim {
            return Err(EmbeddingError::failed(
                "pooling",
                format!(
                    "expected {} dimensions, got {}",
                    self.embedding_dim,
                    values.len()
                ),
            ));
        }

        Ok(Embedding::new(values))
    }

    /// Output dimension of every embedding this instance produces.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Returns `false` if the model failed to load.
    pub fn is_available(&self) -> bool {
        !matches!(self.backend, EmbedderBackend::Unavailable { .. })
    }

    /// Why the model is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.backend {
            EmbedderBackend::Unavailable { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }

    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

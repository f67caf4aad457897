use std::io;
use std::path::{Path, PathBuf};

use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::{Tokenizer, TruncationParams};

use super::error::EmbeddingError;

const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const WEIGHTS_FILE: &str = "model.safetensors";

/// The three files a BERT sentence encoder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: PathBuf,
}

impl ModelFiles {
    /// Locates model files inside a local directory.
    pub fn from_dir(dir: &Path) -> Result<Self, EmbeddingError> {
        if !dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: dir.to_path_buf(),
            });
        }

        let files = Self {
            config: dir.join(CONFIG_FILE),
            tokenizer: dir.join(TOKENIZER_FILE),
            weights: dir.join(WEIGHTS_FILE),
        };

        for path in [&files.config, &files.tokenizer, &files.weights] {
            if !path.exists() {
                return Err(EmbeddingError::ModelLoadFailed {
                    reason: format!("missing {} in {}", file_name(path), dir.display()),
                });
            }
        }

        Ok(files)
    }

    /// Fetches (or reuses cached) model files from the Hugging Face hub.
    pub fn from_hub(model_id: &str) -> Result<Self, EmbeddingError> {
        let api = Api::new().map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("hub client: {}", e),
        })?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let fetch = |name: &str| {
            repo.get(name)
                .map_err(|e| EmbeddingError::ModelLoadFailed {
                    reason: format!("{} from {}: {}", name, model_id, e),
                })
        };

        Ok(Self {
            config: fetch(CONFIG_FILE)?,
            tokenizer: fetch(TOKENIZER_FILE)?,
            weights: fetch(WEIGHTS_FILE)?,
        })
    }
}

/// Loads `tokenizer.json` with truncation at `max_len` tokens and padding disabled.
pub fn load_tokenizer_with_truncation(path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(path).map_err(io::Error::other)?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_len,
            ..Default::default()
        }))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;
    tokenizer.with_padding(None);

    Ok(tokenizer)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RESUME_MATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_MAX_DOCUMENT_BYTES, DEFAULT_MIN_CHAR_COUNT, DEFAULT_MIN_WORD_COUNT,
    DEFAULT_MODEL_ID, DEFAULT_MODERATE_THRESHOLD, DEFAULT_PREVIEW_CHAR_LIMIT,
    DEFAULT_STRONG_THRESHOLD,
};
use crate::embedding::EmbedderConfig;
use crate::extraction::{DEFAULT_TEXT_ENCODINGS, ExtractionConfig, TextEncoding};
use crate::scoring::Thresholds;

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RESUME_MATCH_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Largest accepted upload, in bytes. Default: 10 MiB.
    pub max_document_bytes: u64,

    /// Lower bound (inclusive) of the strong tier. Default: `70.0`.
    pub strong_threshold: f64,

    /// Lower bound (inclusive) of the moderate tier. Default: `50.0`.
    pub moderate_threshold: f64,

    /// Normalized word count below which a document is flagged. Default: `50`.
    pub min_word_count: usize,

    /// Trimmed resume length below which it is flagged as likely scanned. Default: `100`.
    pub min_char_count: usize,

    /// Characters kept in text previews. Default: `1000`.
    pub preview_char_limit: usize,

    /// Plain-text decode order. Default: `utf-8,latin-1,cp1252`.
    pub text_encodings: Vec<TextEncoding>,

    /// Local model directory. When unset the model is fetched by `model_id`.
    pub model_path: Option<PathBuf>,

    /// Hub id of the sentence encoder.
    pub model_id: String,

    /// Use the deterministic stub embedder instead of a real model.
    pub embedder_stub: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            strong_threshold: DEFAULT_STRONG_THRESHOLD,
            moderate_threshold: DEFAULT_MODERATE_THRESHOLD,
            min_word_count: DEFAULT_MIN_WORD_COUNT,
            min_char_count: DEFAULT_MIN_CHAR_COUNT,
            preview_char_limit: DEFAULT_PREVIEW_CHAR_LIMIT,
            text_encodings: DEFAULT_TEXT_ENCODINGS.to_vec(),
            model_path: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            embedder_stub: false,
        }
    }
}

impl Config {
    const ENV_MAX_DOCUMENT_BYTES: &'static str = "RESUME_MATCH_MAX_DOCUMENT_BYTES";
    const ENV_STRONG_THRESHOLD: &'static str = "RESUME_MATCH_STRONG_THRESHOLD";
    const ENV_MODERATE_THRESHOLD: &'static str = "RESUME_MATCH_MODERATE_THRESHOLD";
    const ENV_MIN_WORD_COUNT: &'static str = "RESUME_MATCH_MIN_WORD_COUNT";
    const ENV_MIN_CHAR_COUNT: &'static str = "RESUME_MATCH_MIN_CHAR_COUNT";
    const ENV_PREVIEW_CHARS: &'static str = "RESUME_MATCH_PREVIEW_CHARS";
    const ENV_TEXT_ENCODINGS: &'static str = "RESUME_MATCH_TEXT_ENCODINGS";
    const ENV_MODEL_PATH: &'static str = "RESUME_MATCH_MODEL_PATH";
    const ENV_MODEL_ID: &'static str = "RESUME_MATCH_MODEL_ID";
    const ENV_EMBEDDER_STUB: &'static str = "RESUME_MATCH_EMBEDDER_STUB";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_document_bytes =
            Self::parse_from_env(Self::ENV_MAX_DOCUMENT_BYTES, defaults.max_document_bytes)?;
        let strong_threshold =
            Self::parse_from_env(Self::ENV_STRONG_THRESHOLD, defaults.strong_threshold)?;
        let moderate_threshold =
            Self::parse_from_env(Self::ENV_MODERATE_THRESHOLD, defaults.moderate_threshold)?;
        let min_word_count =
            Self::parse_from_env(Self::ENV_MIN_WORD_COUNT, defaults.min_word_count)?;
        let min_char_count =
            Self::parse_from_env(Self::ENV_MIN_CHAR_COUNT, defaults.min_char_count)?;
        let preview_char_limit =
            Self::parse_from_env(Self::ENV_PREVIEW_CHARS, defaults.preview_char_limit)?;
        let text_encodings = Self::parse_encodings_from_env(defaults.text_encodings)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let model_id = Self::parse_string_from_env(Self::ENV_MODEL_ID, defaults.model_id);
        let embedder_stub = Self::parse_bool_from_env(Self::ENV_EMBEDDER_STUB, false)?;

        Ok(Self {
            max_document_bytes,
            strong_threshold,
            moderate_threshold,
            min_word_count,
            min_char_count,
            preview_char_limit,
            text_encodings,
            model_path,
            model_id,
            embedder_stub,
        })
    }

    /// Validates limits, thresholds and paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_document_bytes == 0 {
            return Err(ConfigError::ZeroMaxDocumentBytes);
        }

        self.thresholds()
            .validate()
            .map_err(|reason| ConfigError::InvalidThresholds { reason })?;

        if self.text_encodings.is_empty() {
            return Err(ConfigError::EmptyEncodings);
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.strong_threshold, self.moderate_threshold)
    }

    pub fn extraction_config(&self) -> ExtractionConfig {
        ExtractionConfig {
            max_document_bytes: self.max_document_bytes,
            text_encodings: self.text_encodings.clone(),
        }
    }

    /// Embedder settings; `embedder_stub` wins over any model location.
    pub fn embedder_config(&self) -> EmbedderConfig {
        if self.embedder_stub {
            return EmbedderConfig::stub();
        }

        match &self.model_path {
            Some(path) => EmbedderConfig {
                model_id: self.model_id.clone(),
                ..EmbedderConfig::new(path.clone())
            },
            None => EmbedderConfig::from_hub(self.model_id.clone()),
        }
    }

    fn parse_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::ParseError {
                    name: var_name,
                    value: value.clone(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_encodings_from_env(
        default: Vec<TextEncoding>,
    ) -> Result<Vec<TextEncoding>, ConfigError> {
        match env::var(Self::ENV_TEXT_ENCODINGS) {
            Ok(value) => value
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(TextEncoding::from_str)
                .collect(),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}

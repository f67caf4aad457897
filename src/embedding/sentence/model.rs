//! BERT sentence encoder with attention-masked mean pooling.

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::embedding::device::select_dtype;
use crate::embedding::error::EmbeddingError;
use crate::embedding::types::l2_normalize;
use crate::embedding::utils::{ModelFiles, load_tokenizer_with_truncation};

pub(crate) struct SentenceEncoder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    hidden_size: usize,
}

impl SentenceEncoder {
    pub(crate) fn load(
        files: &ModelFiles,
        max_seq_len: usize,
        device: Device,
    ) -> Result<Self, EmbeddingError> {
        let config_content = std::fs::read_to_string(&files.config).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("read {}: {}", files.config.display(), e),
            }
        })?;
        let config: BertConfig =
            serde_json::from_str(&config_content).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("parse model config: {}", e),
            })?;

        let max_len = max_seq_len.min(config.max_position_embeddings);
        let tokenizer = load_tokenizer_with_truncation(&files.tokenizer, max_len).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        let dtype = select_dtype(&device);

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(std::slice::from_ref(&files.weights), dtype, &device)
                .map_err(|e| EmbeddingError::ModelLoadFailed {
                    reason: format!("weights: {}", e),
                })?
        };

        let model = BertModel::load(vb, &config).map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("Failed to load BERT model: {}", e),
        })?;

        info!(
            hidden_size = config.hidden_size,
            num_layers = config.num_hidden_layers,
            max_seq_len = max_len,
            ?dtype,
            "BERT sentence encoder loaded"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            hidden_size: config.hidden_size,
        })
    }

    pub(crate) fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub(crate) fn device(&self) -> &Device {
        &self.device
    }

    /// Mean-pooled, L2-normalized embedding of `text`.
    pub(crate) fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| EmbeddingError::failed("tokenization", e))?;

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Running encoder forward pass"
        );

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        // hidden: [1, seq_len, hidden_size]
        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?
            .to_dtype(DType::F32)?;

        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let token_count = mask.sum(1)?;
        let pooled = summed.broadcast_div(&token_count)?.squeeze(0)?;

        let mut values: Vec<f32> = pooled.to_vec1()?;
        l2_normalize(&mut values);

        Ok(values)
    }
}

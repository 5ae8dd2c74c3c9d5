//! XLM-RoBERTa token-classification scorer (LLMLingua-2 checkpoints).

use crate::scorer::{mean_by_word, pack_windows, TokenScorer};
use anyhow::{anyhow, Context, Result};
use candle_core::{DType, Device, Module, Tensor};
use candle_nn::{linear, Linear, VarBuilder};
use candle_transformers::models::xlm_roberta::{Config, XLMRobertaModel};
use hf_hub::api::sync::Api;
use std::path::Path;
use tokenizers::Tokenizer;
use tracing::debug;

/// Model context length, including `<s>` and `</s>`.
const MAX_WINDOW_TOKENS: usize = 512;
/// Label 0 = drop, label 1 = keep.
const NUM_LABELS: usize = 2;
const KEEP_LABEL: usize = 1;

pub struct ModelScorer {
    tokenizer: Tokenizer,
    encoder: XLMRobertaModel,
    classifier: Linear,
    device: Device,
    bos_id: u32,
    eos_id: u32,
}

impl ModelScorer {
    /// Resolve the checkpoint through the hub cache (`HF_HOME`), fetching
    /// missing files.
    pub fn from_hub(model_id: &str) -> Result<Self> {
        let api = Api::new().context("Failed to initialize HF API")?;
        let repo = api.model(model_id.to_string());
        let fetch = |file: &str| {
            repo.get(file)
                .with_context(|| format!("Failed to fetch {file} for {model_id}"))
        };
        let config = fetch("config.json")?;
        let tokenizer = fetch("tokenizer.json")?;
        let weights = fetch("model.safetensors")?;
        Self::from_files(&config, &tokenizer, &weights)
    }

    pub fn from_files(config: &Path, tokenizer: &Path, weights: &Path) -> Result<Self> {
        let device = Device::Cpu;
        let raw = std::fs::read_to_string(config)
            .with_context(|| format!("Failed to read {}", config.display()))?;
        let config: Config = serde_json::from_str(&raw).context("Invalid model config")?;

        let mut tokenizer = Tokenizer::from_file(tokenizer)
            .map_err(|e| anyhow!("Failed to load tokenizer: {e}"))?;
        tokenizer
            .with_truncation(None)
            .map_err(|e| anyhow!("Failed to disable truncation: {e}"))?;
        tokenizer.with_padding(None);
        let bos_id = tokenizer
            .token_to_id("<s>")
            .ok_or_else(|| anyhow!("tokenizer has no <s> token"))?;
        let eos_id = tokenizer
            .token_to_id("</s>")
            .ok_or_else(|| anyhow!("tokenizer has no </s> token"))?;

        // SAFETY: the weights file is not modified while mapped.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, &device)? };
        let encoder = XLMRobertaModel::new(&config, vb.pp("roberta"))?;
        let classifier = linear(config.hidden_size, NUM_LABELS, vb.pp("classifier"))?;
        debug!(layers = config.num_hidden_layers, "model loaded");

        Ok(Self { tokenizer, encoder, classifier, device, bos_id, eos_id })
    }

    /// Keep-probabilities for one window of token ids.
    fn window_probs(&self, ids: &[u32]) -> Result<Vec<f32>> {
        let mut input = Vec::with_capacity(ids.len() + 2);
        input.push(self.bos_id);
        input.extend_from_slice(ids);
        input.push(self.eos_id);

        let input_ids = Tensor::new(input.as_slice(), &self.device)?.unsqueeze(0)?;
        let attention_mask = input_ids.ones_like()?;
        let token_type_ids = input_ids.zeros_like()?;
        let hidden = self
            .encoder
            .forward(&input_ids, &attention_mask, &token_type_ids, None, None, None)?;
        let logits = self.classifier.forward(&hidden)?;
        let probs = candle_nn::ops::softmax_last_dim(&logits)?;
        let keep = probs
            .squeeze(0)?
            .narrow(1, KEEP_LABEL, 1)?
            .squeeze(1)?
            .to_vec1::<f32>()?;
        // Drop the <s> / </s> positions.
        Ok(keep[1..keep.len() - 1].to_vec())
    }
}

impl TokenScorer for ModelScorer {
    fn score(&self, words: &[&str]) -> Result<Vec<f32>> {
        if words.is_empty() {
            return Ok(Vec::new());
        }
        let encoding = self
            .tokenizer
            .encode(words.to_vec(), false)
            .map_err(|e| anyhow!("Tokenization failed: {e}"))?;
        let ids = encoding.get_ids();
        let word_ids = encoding.get_word_ids();

        let mut token_probs = Vec::with_capacity(ids.len());
        let windows = pack_windows(word_ids, MAX_WINDOW_TOKENS - 2);
        debug!(tokens = ids.len(), windows = windows.len(), "scoring");
        for window in windows {
            token_probs.extend(self.window_probs(&ids[window])?);
        }
        Ok(mean_by_word(word_ids, &token_probs, words.len()))
    }
}

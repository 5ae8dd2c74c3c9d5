//! The LLMLingua-2 compressor: segment, score, select, reassemble.

use crate::accounting::{Savings, TokenCounter};
use crate::scorer::TokenScorer;
use crate::segment::{reassemble, Segmenter};
use crate::select::select;
use anyhow::{ensure, Context};
use serde_json::Value;
use tracing::debug;
use tt_core::{CompressParams, EngineOutput, PromptCompressor};

pub struct LinguaCompressor<S> {
    scorer: S,
    counter: TokenCounter,
}

impl<S: TokenScorer> LinguaCompressor<S> {
    pub fn new(scorer: S) -> anyhow::Result<Self> {
        let counter = TokenCounter::cl100k().context("failed to load the cl100k encoding")?;
        Ok(Self { scorer, counter })
    }

    pub fn compress(&self, prompt: &str, rate: f64, force_tokens: &[String]) -> anyhow::Result<EngineOutput> {
        ensure!(rate > 0.0 && rate <= 1.0, "rate must be in (0, 1], got {rate}");
        let segmenter = Segmenter::new(force_tokens).context("invalid force tokens")?;
        let words = segmenter.segment(prompt);
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();

        let probs = self.scorer.score(&texts)?;
        ensure!(
            probs.len() == words.len(),
            "scorer returned {} probabilities for {} words",
            probs.len(),
            words.len()
        );

        let keep = select(&words, &probs, rate);
        let compressed = reassemble(&words, &keep);
        debug!(
            words = words.len(),
            kept = keep.iter().filter(|k| **k).count(),
            "selected words"
        );

        let savings = Savings::new(self.counter.count(prompt), self.counter.count(&compressed));
        Ok(EngineOutput {
            compressed_prompt: compressed,
            origin_tokens: Some(savings.origin),
            compressed_tokens: Some(savings.compressed),
            ratio: Some(Value::String(savings.ratio_label())),
            rate: Some(Value::String(savings.rate_label())),
            saving: Some(Value::String(savings.saving_label())),
        })
    }
}

impl<S: TokenScorer> PromptCompressor for LinguaCompressor<S> {
    fn compress_prompt(&self, prompt: &str, params: &CompressParams) -> anyhow::Result<EngineOutput> {
        self.compress(prompt, params.rate, &params.force_tokens)
    }
}

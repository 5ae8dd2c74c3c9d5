//! GPT token accounting for compression statistics.

use tiktoken_rs::CoreBPE;

/// GPT-4 prompt price in dollars per 1k tokens, used for the saving line.
const GPT4_PRICE_PER_1K: f64 = 0.06;

/// Counts tokens with the cl100k encoding (GPT-3.5 / GPT-4).
pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    pub fn cl100k() -> anyhow::Result<Self> {
        Ok(Self { bpe: tiktoken_rs::cl100k_base()? })
    }

    pub fn count(&self, text: &str) -> u64 {
        self.bpe.encode_with_special_tokens(text).len() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Savings {
    pub origin: u64,
    pub compressed: u64,
}

impl Savings {
    pub fn new(origin: u64, compressed: u64) -> Self {
        Self { origin, compressed }
    }

    /// `"2.0x"`.
    pub fn ratio_label(&self) -> String {
        format!("{:.1}x", self.origin as f64 / self.compressed.max(1) as f64)
    }

    /// `"50.0%"`, share of tokens retained.
    pub fn rate_label(&self) -> String {
        format!("{:.1}%", self.compressed as f64 / self.origin.max(1) as f64 * 100.0)
    }

    pub fn saving_label(&self) -> String {
        let dropped = self.origin.saturating_sub(self.compressed) as f64;
        format!(", Saving ${:.1} in GPT-4.", dropped * GPT4_PRICE_PER_1K / 1000.0)
    }
}

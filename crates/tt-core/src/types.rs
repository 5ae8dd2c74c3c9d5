use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for `ratio` / `saving` when the engine does not report them.
pub const FALLBACK_PERCENT: &str = "50%";

/// Success envelope written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub compressed_prompt: String,
    pub original_tokens: u64,
    pub compressed_tokens: u64,
    /// String such as `"2.1x"` or a bare number, depending on the engine.
    pub ratio: Value,
    pub saving: Value,
}

impl CompressionResult {
    /// Fill the envelope from raw engine output, backfilling anything the
    /// engine left out with word counts and the `"50%"` placeholder.
    pub fn from_engine(prompt: &str, output: EngineOutput) -> Self {
        let original_tokens = output
            .origin_tokens
            .unwrap_or_else(|| prompt.split_whitespace().count() as u64);
        let compressed_tokens = output
            .compressed_tokens
            .unwrap_or_else(|| output.compressed_prompt.split_whitespace().count() as u64);
        Self {
            original_tokens,
            compressed_tokens,
            ratio: output.ratio.unwrap_or_else(|| FALLBACK_PERCENT.into()),
            saving: output.saving.unwrap_or_else(|| FALLBACK_PERCENT.into()),
            compressed_prompt: output.compressed_prompt,
        }
    }
}

/// Error envelope written to stderr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub traceback: Option<String>,
}

impl From<BridgeError> for ErrorRecord {
    fn from(err: BridgeError) -> Self {
        let kind = err.kind().to_string();
        let report = anyhow::Error::new(err);
        Self {
            error: report.to_string(),
            kind,
            traceback: Some(format!("{report:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
}

/// Engine construction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub model_name: String,
    pub use_llmlingua2: bool,
    pub device: Device,
}

/// Per-call compression parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressParams {
    pub rate: f64,
    pub force_tokens: Vec<String>,
}

/// Raw engine result. Only the compressed text is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    pub compressed_prompt: String,
    #[serde(default)]
    pub origin_tokens: Option<u64>,
    #[serde(default)]
    pub compressed_tokens: Option<u64>,
    #[serde(default)]
    pub ratio: Option<Value>,
    /// Achieved rate label such as `"50.0%"`. Reported by the engine but
    /// not part of the success envelope.
    #[serde(default)]
    pub rate: Option<Value>,
    #[serde(default)]
    pub saving: Option<Value>,
}

impl EngineOutput {
    pub fn new(compressed_prompt: impl Into<String>) -> Self {
        Self {
            compressed_prompt: compressed_prompt.into(),
            ..Default::default()
        }
    }
}

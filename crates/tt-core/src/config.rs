use crate::error::{BridgeError, Result};
use crate::types::{CompressParams, Device, EngineOptions};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_RATE: f64 = 0.5;
pub const MAX_PROMPT_CHARS: usize = 50_000;
pub const LLMLINGUA2_MODEL: &str = "microsoft/llmlingua-2-xlm-roberta-large-meetingbank";
/// Tokens the compressor must never drop; they carry sentence structure.
pub const FORCE_TOKENS: &[&str] = &["\n", ".", "!", "?", ","];
/// Oldest engine library release that accepts the LLMLingua-2 option.
pub const MIN_ENGINE_VERSION: &str = "0.2.1";

/// Per-invocation options read from the header line.
///
/// Unknown keys are ignored; the host also sends `model` and
/// `force_tokens`, neither of which is honored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressConfig {
    #[serde(default = "default_rate", deserialize_with = "rate_or_default")]
    pub rate: f64,
}

fn default_rate() -> f64 {
    DEFAULT_RATE
}

fn rate_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_RATE))
}

impl CompressConfig {
    /// Build from an already-parsed header object.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(BridgeError::ConfigParse(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rate.is_finite() || self.rate <= 0.0 || self.rate > 1.0 {
            return Err(BridgeError::ConfigParse(format!(
                "rate must be in (0, 1], got {}",
                self.rate
            )));
        }
        Ok(())
    }
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self { rate: DEFAULT_RATE }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Fixed engine construction parameters and prompt limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub model_name: String,
    pub use_llmlingua2: bool,
    pub device: Device,
    pub force_tokens: Vec<String>,
    pub max_prompt_chars: usize,
    pub min_library_version: String,
}

impl EngineConfig {
    pub fn options(&self) -> EngineOptions {
        EngineOptions {
            model_name: self.model_name.clone(),
            use_llmlingua2: self.use_llmlingua2,
            device: self.device,
        }
    }

    pub fn params(&self, config: &CompressConfig) -> CompressParams {
        CompressParams {
            rate: config.rate,
            force_tokens: self.force_tokens.clone(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_name: LLMLINGUA2_MODEL.into(),
            use_llmlingua2: true,
            device: Device::Cpu,
            force_tokens: FORCE_TOKENS.iter().map(|t| t.to_string()).collect(),
            max_prompt_chars: MAX_PROMPT_CHARS,
            min_library_version: MIN_ENGINE_VERSION.into(),
        }
    }
}

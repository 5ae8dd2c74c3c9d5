use crate::engine::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid config header: {0}")]
    ConfigParse(String),
    #[error("Invalid config header: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
    #[error("Empty prompt received")]
    EmptyPrompt,
    #[error("Prompt became empty after cleaning. Original text may have invalid encoding.")]
    EmptyAfterCleaning,
    #[error("Prompt too large: {len} chars (max {}). Please select smaller text.", group_thousands(*.max))]
    PromptTooLarge { len: usize, max: usize },
    #[error(
        "Incompatible {library} version detected. The 'use_llmlingua2' option requires \
         {library} >= {required}. Current version: {found}. Please upgrade {library} to {required} or newer."
    )]
    IncompatibleLibrary {
        library: String,
        required: String,
        found: String,
        #[source]
        source: LoadError,
    },
    #[error(transparent)]
    Engine(#[from] anyhow::Error),
}

impl BridgeError {
    /// Tag surfaced in the `type` field of the error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) | Self::ConfigJson(_) => "ConfigParseError",
            Self::Input(_) => "InputError",
            Self::EmptyPrompt => "EmptyPromptError",
            Self::EmptyAfterCleaning => "EmptyAfterCleaningError",
            Self::PromptTooLarge { .. } => "PromptTooLargeError",
            Self::IncompatibleLibrary { .. } => "IncompatibleLibraryError",
            Self::Engine(_) => "EngineError",
        }
    }
}

/// `50000` -> `50,000`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub type Result<T> = std::result::Result<T, BridgeError>;

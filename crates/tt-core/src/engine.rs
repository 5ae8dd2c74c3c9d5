//! The seam between the bridge and a prompt-compression engine library.

use crate::types::{CompressParams, EngineOptions, EngineOutput};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The library does not know one of the construction options.
    #[error("unexpected option '{0}'")]
    UnsupportedOption(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A library able to construct compression engines.
pub trait EngineLibrary: Send + Sync {
    /// Name used in diagnostics, e.g. `tt-lingua`.
    fn name(&self) -> &str;

    /// Release version of the library, ideally semver.
    fn version(&self) -> &str;

    /// Construct an engine. May block on model loading.
    fn load(&self, options: &EngineOptions) -> Result<Box<dyn PromptCompressor>, LoadError>;
}

/// A loaded engine.
pub trait PromptCompressor: Send + Sync {
    fn compress_prompt(&self, prompt: &str, params: &CompressParams) -> anyhow::Result<EngineOutput>;
}

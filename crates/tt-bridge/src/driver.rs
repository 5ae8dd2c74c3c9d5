//! Engine construction and invocation.

use tracing::debug;
use tt_core::{
    BridgeError, CompressConfig, CompressionResult, EngineConfig, EngineLibrary, LoadError, PromptCompressor, Result,
};

/// Construction option older engine libraries do not understand.
const LLMLINGUA2_OPTION: &str = "use_llmlingua2";

pub struct Driver<'a> {
    library: &'a dyn EngineLibrary,
    config: &'a EngineConfig,
}

impl<'a> Driver<'a> {
    pub fn new(library: &'a dyn EngineLibrary, config: &'a EngineConfig) -> Self {
        Self { library, config }
    }

    /// Build the engine. May block on model loading.
    pub fn load(&self) -> Result<Box<dyn PromptCompressor>> {
        self.library.load(&self.config.options()).map_err(|err| {
            if matches!(&err, LoadError::UnsupportedOption(option) if option == LLMLINGUA2_OPTION) {
                return BridgeError::IncompatibleLibrary {
                    library: self.library.name().to_string(),
                    required: self.config.min_library_version.clone(),
                    found: self.library.version().to_string(),
                    source: err,
                };
            }
            match err {
                LoadError::Other(inner) => BridgeError::Engine(inner),
                other => BridgeError::Engine(anyhow::Error::new(other)),
            }
        })
    }

    pub fn compress(&self, prompt: &str, config: &CompressConfig) -> Result<CompressionResult> {
        let engine = self.load()?;
        let params = self.config.params(config);
        debug!("Compressing with rate {}", params.rate);
        let output = engine.compress_prompt(prompt, &params)?;
        Ok(CompressionResult::from_engine(prompt, output))
    }
}

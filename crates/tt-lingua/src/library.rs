use crate::compressor::LinguaCompressor;
use crate::scorer::TokenScorer;
use tracing::debug;
use tt_core::{Device, EngineLibrary, EngineOptions, LoadError, PromptCompressor};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine library entry point handed to the bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinguaLibrary;

impl LinguaLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl EngineLibrary for LinguaLibrary {
    fn name(&self) -> &str {
        "tt-lingua"
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn load(&self, options: &EngineOptions) -> Result<Box<dyn PromptCompressor>, LoadError> {
        if !options.use_llmlingua2 {
            return Err(anyhow::anyhow!(
                "{} only implements LLMLingua-2 token classification; use_llmlingua2 must be enabled",
                self.name()
            )
            .into());
        }
        match options.device {
            Device::Cpu => {}
        }
        debug!(model = %options.model_name, "loading engine");
        let scorer = load_scorer(&options.model_name)?;
        Ok(Box::new(LinguaCompressor::new(scorer)?))
    }
}

#[cfg(feature = "model")]
fn load_scorer(model_name: &str) -> anyhow::Result<Box<dyn TokenScorer>> {
    Ok(Box::new(crate::model::ModelScorer::from_hub(model_name)?))
}

#[cfg(not(feature = "model"))]
fn load_scorer(model_name: &str) -> anyhow::Result<Box<dyn TokenScorer>> {
    anyhow::bail!("cannot load {model_name}: tt-lingua was built with `--no-default-features` (rebuild with default features or `--features model`)")
}

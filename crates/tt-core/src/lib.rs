//! Shared types for the TokenTrim compression bridge.
//!
//! The bridge binary, the engine library and their tests all speak in
//! terms of the records defined here: the per-invocation config header,
//! the fixed engine parameters, the success/error envelopes and the
//! traits an engine library implements.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use config::{CompressConfig, EngineConfig};
pub use engine::{EngineLibrary, LoadError, PromptCompressor};
pub use error::{BridgeError, Result};
pub use types::{CompressParams, CompressionResult, Device, EngineOptions, EngineOutput, ErrorRecord};

//! LLMLingua-2 prompt compression.
//!
//! Stages:
//! 1. Segmentation: whitespace words, force tokens split off
//! 2. Scoring: per-word keep probability from a token classifier
//! 3. Selection: percentile threshold derived from the target rate
//! 4. Reassembly and GPT token accounting

pub mod accounting;
pub mod compressor;
pub mod library;
#[cfg(feature = "model")]
pub mod model;
pub mod scorer;
pub mod segment;
pub mod select;

pub use compressor::LinguaCompressor;
pub use library::{LinguaLibrary, VERSION};
pub use scorer::TokenScorer;
pub use segment::Word;

//! TokenTrim compression bridge.
//!
//! Stages, strictly in order:
//! 0. Probe: engine library version check (before stdin is touched)
//! 1. Frame: `<config-json>\n<prompt...EOF>` from stdin
//! 2. Sanitize: safe character subset, size bound
//! 3. Drive: load the engine once and compress
//! 4. Envelope: one JSON record on stdout (success) or stderr (error)

pub mod driver;
pub mod envelope;
pub mod frame;
pub mod logging;
pub mod probe;
pub mod sanitize;

use std::io::{Read, Write};
use tracing::debug;
use tt_core::{CompressionResult, EngineConfig, EngineLibrary, Result};

pub use driver::Driver;
pub use envelope::{EXIT_FAILURE, EXIT_SUCCESS};

/// Characters of the prompt shown in the preview diagnostic.
const PREVIEW_CHARS: usize = 100;

/// Frame, sanitize and compress one prompt.
pub fn run<R: Read>(library: &dyn EngineLibrary, engine_config: &EngineConfig, input: R) -> Result<CompressionResult> {
    let frame = frame::read_frame(input)?;
    let prompt = sanitize::sanitize(&frame.prompt, engine_config.max_prompt_chars)?;

    debug!("Config: {}", frame.header);
    debug!("Prompt length: {} chars", prompt.chars().count());
    debug!("Prompt preview: {}...", prompt.chars().take(PREVIEW_CHARS).collect::<String>());

    Driver::new(library, engine_config).compress(&prompt, &frame.config)
}

/// Whole-process behavior over explicit streams. Returns the exit status.
pub fn main_with<R: Read, O: Write, E: Write>(
    library: &dyn EngineLibrary,
    input: R,
    stdout: &mut O,
    stderr: &mut E,
) -> u8 {
    let engine_config = EngineConfig::default();
    if let Err(mismatch) = probe::check_version(library, &engine_config.min_library_version) {
        // Nothing has been read from `input` at this point.
        let _ = writeln!(stderr, "{mismatch}");
        return EXIT_FAILURE;
    }
    envelope::emit(run(library, &engine_config, input), stdout, stderr)
}

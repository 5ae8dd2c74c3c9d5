//! Success and error envelopes at the process boundary.

use anyhow::Context;
use std::io::{self, Write};
use tt_core::{BridgeError, CompressionResult, ErrorRecord, Result};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// One JSON line.
pub fn write_record<W: Write, T: serde::Serialize>(out: &mut W, record: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)?;
    out.flush()
}

/// Write the outcome to the matching stream and return the exit status.
pub fn emit<O: Write, E: Write>(outcome: Result<CompressionResult>, stdout: &mut O, stderr: &mut E) -> u8 {
    let err = match outcome {
        Ok(result) => match write_record(stdout, &result) {
            Ok(()) => return EXIT_SUCCESS,
            Err(e) => BridgeError::Engine(anyhow::Error::new(e).context("Failed to write result")),
        },
        Err(err) => err,
    };
    emit_error(err, stderr)
}

pub fn emit_error<E: Write>(err: BridgeError, stderr: &mut E) -> u8 {
    let record = ErrorRecord::from(err);
    if let Err(e) = write_record(stderr, &record).context("Failed to write error record") {
        tracing::warn!("{e:#}");
    }
    EXIT_FAILURE
}

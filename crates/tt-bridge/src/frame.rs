//! Input framing: one JSON header line, then the prompt body up to EOF.

use crate::sanitize::decode_lossy;
use serde_json::Value;
use std::io::Read;
use tt_core::{BridgeError, CompressConfig, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Header exactly as received, for diagnostics.
    pub header: Value,
    pub config: CompressConfig,
    /// Body decoded as UTF-8 (invalid sequences replaced) and trimmed.
    pub prompt: String,
}

/// Read the whole stream, blocking until EOF.
pub fn read_frame<R: Read>(mut reader: R) -> Result<Frame> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    parse_frame(&input)
}

pub fn parse_frame(input: &[u8]) -> Result<Frame> {
    let (head, body) = match input.iter().position(|&b| b == b'\n') {
        Some(i) => (&input[..i], &input[i + 1..]),
        None => (input, &[][..]),
    };

    let header: Value = serde_json::from_slice(head)?;
    let config = CompressConfig::from_value(header.clone())?;

    let prompt = decode_lossy(body).trim_matches(is_frame_space).to_string();
    if prompt.is_empty() {
        return Err(BridgeError::EmptyPrompt);
    }
    Ok(Frame { header, config, prompt })
}

/// Whitespace for the outer body trim: Unicode White_Space plus the
/// information separators U+001C..=U+001F.
fn is_frame_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

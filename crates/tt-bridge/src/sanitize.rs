//! Prompt sanitization: a safe character subset with line structure kept.
//!
//! Rules, in order:
//! 1. NUL removal
//! 2. Encoding repair (replacement glyphs become a space)
//! 3. Control characters become a space
//! 4. Whitespace runs collapse within each line
//! 5. Outer trim

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use tt_core::{BridgeError, Result};

static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// U+FFFD decoded as Latin-1, as it arrives from mis-decoding upstreams.
const MOJIBAKE_REPLACEMENT: &str = "\u{00EF}\u{00BF}\u{00BD}";

/// Decode UTF-8, substituting U+FFFD for invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn strip_nulls(text: &str) -> String {
    text.replace('\0', "")
}

pub fn repair_encoding(text: &str) -> String {
    text.replace(MOJIBAKE_REPLACEMENT, " ")
        .replace(char::REPLACEMENT_CHARACTER, " ")
}

/// Tab, LF, CR, printable ASCII and anything non-ASCII.
pub fn is_allowed(c: char) -> bool {
    matches!(c as u32, 9 | 10 | 13 | 32..=126 | 128..)
}

pub fn filter_controls(text: &str) -> String {
    text.chars().map(|c| if is_allowed(c) { c } else { ' ' }).collect()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| RE_WHITESPACE_RUN.replace_all(line.trim(), " "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply all cleaning rules.
pub fn clean_text(text: &str) -> String {
    let mut result = strip_nulls(text);
    result = repair_encoding(&result);
    result = filter_controls(&result);
    result = collapse_whitespace(&result);
    result.trim().to_string()
}

/// Clean the prompt and enforce the size bound.
pub fn sanitize(prompt: &str, max_chars: usize) -> Result<String> {
    let original_len = prompt.chars().count();
    let cleaned = clean_text(prompt);
    let cleaned_len = cleaned.chars().count();

    if cleaned_len != original_len {
        debug!("Cleaned text from {} to {} chars", original_len, cleaned_len);
    }
    if cleaned.is_empty() {
        return Err(BridgeError::EmptyAfterCleaning);
    }
    if cleaned_len > max_chars {
        return Err(BridgeError::PromptTooLarge { len: cleaned_len, max: max_chars });
    }
    Ok(cleaned)
}

// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Hex sentence parsing
//!
//! A hex sentence is a run of ASCII hexadecimal words separated by whitespace,
//! one word per byte:
//!
//! ```text
//! "   00 f2 0    000076 6 0  ff"  ->  [0x00, 0xf2, 0x00, 0x76, 0x06, 0x00, 0xff]
//! ```
//!
//! Leading zeros and an optional `0x` prefix are accepted. A word longer than
//! [`MAX_WORD_SIZE`] or a value above `0xff` rejects the whole sentence.

use tracing::trace;

use crate::error::{ParseError, ParseResult};
use crate::REQUEST_CAPACITY;

/// Longest accepted word, in characters
pub const MAX_WORD_SIZE: usize = 16;

/// Bytes produced by [`parse`], bounded by the largest request
pub type ParsedBytes = heapless::Vec<u8, REQUEST_CAPACITY>;

/// Parse a hex sentence into at most `max_out` bytes
///
/// Parsing stops once `max_out` bytes have been produced; words past that
/// point are neither parsed nor validated. `max_out` is clamped to
/// [`REQUEST_CAPACITY`]. Empty or all-whitespace input yields no bytes.
///
/// # Errors
///
/// - [`ParseError::WordTooLong`] if a word exceeds [`MAX_WORD_SIZE`] characters
/// - [`ParseError::InvalidToken`] if a word is not a hex value in `0..=255`
pub fn parse(input: impl AsRef<[u8]>, max_out: usize) -> ParseResult<ParsedBytes> {
    let limit = max_out.min(REQUEST_CAPACITY);
    let mut out = ParsedBytes::new();

    for word in words(input.as_ref()) {
        if out.len() >= limit {
            trace!(limit, "hex sentence truncated");
            break;
        }
        let byte = parse_word(word)?;
        // limit <= capacity, so this cannot fail
        let _ = out.push(byte);
    }

    Ok(out)
}

/// Split on runs of ASCII whitespace, skipping empty runs
fn words(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    input
        .split(|&b| is_space(b))
        .filter(|word| !word.is_empty())
}

/// Space, tab, newline, vertical tab, form feed, carriage return
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn parse_word(word: &[u8]) -> ParseResult<u8> {
    if word.len() > MAX_WORD_SIZE {
        return Err(ParseError::WordTooLong { len: word.len() });
    }

    let invalid = || ParseError::InvalidToken {
        word: String::from_utf8_lossy(word).into_owned(),
    };

    let digits = word
        .strip_prefix(b"0x")
        .or_else(|| word.strip_prefix(b"0X"))
        .unwrap_or(word);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(invalid());
    }

    // All hex digits, so the slice is valid UTF-8
    let digits = std::str::from_utf8(digits).map_err(|_| invalid())?;
    u8::from_str_radix(digits, 16).map_err(|_| invalid())
}

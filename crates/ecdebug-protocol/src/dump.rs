// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Hex dump rendering for raw responses
//!
//! ```text
//! 00000000: 00 31 32 2f 32 31 2f 31 38 00 38 00 01 00 2f 00  .12/21/18.8.../.
//! 00000010: 2a                                               *
//! ```

use std::fmt::Write;

use tracing::debug;

use crate::EXTENDED_DATA_SIZE;

/// Bytes rendered per line
pub const BYTES_PER_LINE: usize = 16;

/// `"00000000: "`
const OFFSET_WIDTH: usize = 10;

/// Two digits per byte, single spaces between
const HEX_WIDTH: usize = BYTES_PER_LINE * 3 - 1;

/// Spaces between the hex column and the ASCII column
const ASCII_GAP: usize = 2;

/// Width of a full line including the newline
pub const LINE_WIDTH: usize = OFFSET_WIDTH + HEX_WIDTH + ASCII_GAP + BYTES_PER_LINE + 1;

/// Output capacity; a full extended response always fits
///
/// Sixteen full lines with offsets take 1216 bytes, so this is larger than
/// four times the extended data size.
pub const DUMP_CAPACITY: usize =
    (EXTENDED_DATA_SIZE + BYTES_PER_LINE - 1) / BYTES_PER_LINE * LINE_WIDTH;

/// Columns included in a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Prefix each line with its byte offset
    pub offsets: bool,
    /// Append the printable-ASCII rendition of each line
    pub ascii: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            offsets: true,
            ascii: true,
        }
    }
}

/// Render the first `length` bytes with offsets and the ASCII column
pub fn format(bytes: &[u8], length: usize) -> String {
    format_with(bytes, length, DumpOptions::default())
}

/// Render the first `length` bytes with the given columns
pub fn format_with(bytes: &[u8], length: usize, options: DumpOptions) -> String {
    format_bounded(bytes, length, options, DUMP_CAPACITY)
}

/// Render at most `capacity` bytes of output
///
/// `length` is clamped to `bytes.len()`. Lines that would not fit are dropped
/// whole, so the output never ends mid-line.
pub fn format_bounded(
    bytes: &[u8],
    length: usize,
    options: DumpOptions,
    capacity: usize,
) -> String {
    let length = length.min(bytes.len());
    let lines = (length + BYTES_PER_LINE - 1) / BYTES_PER_LINE;
    let mut out = String::with_capacity((lines * LINE_WIDTH).min(capacity));
    let mut line = String::with_capacity(LINE_WIDTH);

    for (row, chunk) in bytes[..length].chunks(BYTES_PER_LINE).enumerate() {
        line.clear();
        write_line(&mut line, row * BYTES_PER_LINE, chunk, options);
        if out.len() + line.len() > capacity {
            debug!(
                rendered = row * BYTES_PER_LINE,
                length, capacity, "hex dump truncated to output capacity"
            );
            break;
        }
        out.push_str(&line);
    }

    out
}

fn write_line(line: &mut String, offset: usize, chunk: &[u8], options: DumpOptions) {
    // Writing to a String cannot fail
    if options.offsets {
        let _ = write!(line, "{offset:08x}: ");
    }

    for (i, byte) in chunk.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{byte:02x}");
    }

    if options.ascii {
        let hex_len = chunk.len() * 3 - 1;
        line.extend(std::iter::repeat(' ').take(HEX_WIDTH - hex_len + ASCII_GAP));
        line.extend(chunk.iter().map(|&b| printable(b)));
    }

    line.push('\n');
}

fn printable(byte: u8) -> char {
    if (0x20..=0x7e).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

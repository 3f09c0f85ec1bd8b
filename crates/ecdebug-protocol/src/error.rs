// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the console codec

/// Result type alias for hex sentence parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for request framing
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Malformed hex sentence
///
/// Either variant invalidates the whole sentence; no partial output is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A single word is longer than [`crate::hex::MAX_WORD_SIZE`]
    #[error("hex word is {len} characters long (max 16)")]
    WordTooLong { len: usize },

    /// A word is not a hexadecimal value in 0..=255
    #[error("invalid hex byte: {word:?}")]
    InvalidToken { word: String },
}

/// Parsed bytes that cannot be framed as a mailbox request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Fewer than three bytes (type + command) were supplied
    #[error("request needs at least 3 bytes (type and command), got {len}")]
    TooShort { len: usize },

    /// Payload does not fit the mailbox data area
    #[error("payload of {len} bytes exceeds mailbox capacity of {capacity} bytes")]
    PayloadTooLong { len: usize, capacity: usize },
}

/// A bounded buffer would have overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{len} bytes exceed buffer capacity of {capacity} bytes")]
pub struct CapacityError {
    pub len: usize,
    pub capacity: usize,
}

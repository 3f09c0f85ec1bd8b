// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for console writes

use std::io;

use ecdebug_protocol::{BuildError, ParseError};

use crate::transport::TransportError;

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

/// Why a console write failed
///
/// None of these are fatal; the session stays usable for the next call.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Sentence longer than the input capacity; nothing was parsed
    #[error("input of {len} bytes exceeds console capacity of {capacity} bytes")]
    InputTooLarge { len: usize, capacity: usize },

    /// Malformed hex sentence; any unread response is kept
    #[error("malformed hex sentence: {0}")]
    Parse(#[from] ParseError),

    /// Not enough bytes for a request; the mailbox was not called
    #[error("invalid request: {0}")]
    Build(#[from] BuildError),

    /// Mailbox round trip failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Mailbox wrote more than the request allowed
    #[error("mailbox returned {len} bytes, request allows {capacity}")]
    ResponseOverflow { len: usize, capacity: usize },
}

impl ConsoleError {
    /// True for mistakes in the written sentence, false for controller-side failures
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConsoleError::InputTooLarge { .. } | ConsoleError::Parse(_) | ConsoleError::Build(_)
        )
    }
}

impl From<ConsoleError> for io::Error {
    fn from(err: ConsoleError) -> Self {
        let kind = match &err {
            e if e.is_input_error() => io::ErrorKind::InvalidInput,
            ConsoleError::Transport(TransportError::Timeout) => io::ErrorKind::TimedOut,
            ConsoleError::Transport(TransportError::Io(inner)) => inner.kind(),
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

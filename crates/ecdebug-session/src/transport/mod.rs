// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mailbox transport contract
//!
//! The session only needs a blocking request/response round trip. Whatever
//! owns the physical channel to the controller implements [`Mailbox`]; the
//! session never retries and never times out a call.

mod loopback;

pub use loopback::LoopbackMailbox;

use ecdebug_protocol::{Request, Response};

/// Result type alias for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Failure reported by a mailbox transport
///
/// The session passes these through to the writer unchanged.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Controller did not answer in time
    #[error("mailbox timed out")]
    Timeout,

    /// Controller is still processing an earlier command
    #[error("mailbox busy")]
    Busy,

    /// Response failed checksum verification
    #[error("response checksum mismatch")]
    ChecksumMismatch,

    /// Controller answered with a non-zero status code
    #[error("controller returned status {0:#04x}")]
    ControllerStatus(u8),

    /// I/O error on the underlying channel
    #[error("mailbox I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other transport-specific error
    #[error("mailbox error: {0}")]
    Other(String),
}

/// Blocking request/response channel to the controller
///
/// `send` performs one round trip and returns the bytes the controller wrote,
/// which must not exceed [`Request::response_capacity`].
pub trait Mailbox {
    fn send(&mut self, request: &Request) -> TransportResult<Response>;
}

impl<M: Mailbox + ?Sized> Mailbox for &mut M {
    fn send(&mut self, request: &Request) -> TransportResult<Response> {
        (**self).send(request)
    }
}

impl<M: Mailbox + ?Sized> Mailbox for Box<M> {
    fn send(&mut self, request: &Request) -> TransportResult<Response> {
        (**self).send(request)
    }
}

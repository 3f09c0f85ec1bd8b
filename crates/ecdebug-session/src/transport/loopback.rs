// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Loopback mailbox for bench work without a controller
//!
//! Answers every request with its own wire framing, cut to the request's
//! response capacity.

use ecdebug_protocol::{Request, Response};
use tracing::debug;

use super::{Mailbox, TransportError, TransportResult};

/// Mailbox that echoes each request back as its response
#[derive(Debug, Default)]
pub struct LoopbackMailbox {
    served: u64,
}

impl LoopbackMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests answered so far
    pub fn served(&self) -> u64 {
        self.served
    }
}

impl Mailbox for LoopbackMailbox {
    fn send(&mut self, request: &Request) -> TransportResult<Response> {
        self.served += 1;

        let mut response = Response::from_slice(&request.to_wire())
            .map_err(|e| TransportError::Other(e.to_string()))?;
        response.truncate(request.response_capacity());
        debug!(served = self.served, len = response.len(), "loopback mailbox echoing request");

        Ok(response)
    }
}

// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! One-shot request/response session
//!
//! ```text
//!            write ok                    read
//!   ┌──────┐ ───────────► ┌─────────────┐ ─────► ┌──────┐
//!   │ Idle │              │ HasResponse │        │ Idle │
//!   └──────┘ ◄─────────── └─────────────┘        └──────┘
//!            write passes parse/build (stale response dropped
//!            before the mailbox call, kept if parsing fails)
//! ```
//!
//! A write holds the session lock across the whole mailbox round trip, so a
//! concurrent read sees the state from strictly before or strictly after it.

use std::sync::Arc;

use ecdebug_protocol::{
    dump, hex, request, DumpOptions, Response, INPUT_CAPACITY, REQUEST_CAPACITY,
};
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::error::{ConsoleError, ConsoleResult};
use crate::transport::Mailbox;

/// Whether a response is waiting to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No unread response
    Idle,
    /// A response is buffered and unread
    HasResponse,
}

/// The read/write pair the console node dispatches to
pub trait RawConsole {
    /// Parse a hex sentence, send it, and buffer the response
    ///
    /// Returns the number of input bytes consumed.
    fn write(&self, text: &[u8]) -> ConsoleResult<usize>;

    /// Take the buffered response as a hex dump, or an empty string
    fn read(&self) -> String;
}

struct SessionInner<M> {
    mailbox: M,
    pending: Option<Response>,
}

/// Raw debug console session over a mailbox
///
/// Holds at most one unread response. Share it between callers with
/// `Arc<DebugSession<M>>`.
pub struct DebugSession<M> {
    inner: Mutex<SessionInner<M>>,
    dump_options: DumpOptions,
}

impl<M: Mailbox> DebugSession<M> {
    /// Create an idle session that renders dumps with offsets and ASCII
    pub fn new(mailbox: M) -> Self {
        Self::with_dump_options(mailbox, DumpOptions::default())
    }

    pub fn with_dump_options(mailbox: M, dump_options: DumpOptions) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                mailbox,
                pending: None,
            }),
            dump_options,
        }
    }

    /// Send a hex sentence to the controller and buffer its response
    ///
    /// Input, parse and build failures leave the session untouched, including
    /// any unread response. Once a request is framed the previous response is
    /// dropped, so a mailbox failure leaves the session idle.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::InputTooLarge`] if `text` exceeds [`INPUT_CAPACITY`]
    /// - [`ConsoleError::Parse`] for malformed hex words
    /// - [`ConsoleError::Build`] for fewer than three bytes
    /// - [`ConsoleError::Transport`] if the mailbox call fails
    /// - [`ConsoleError::ResponseOverflow`] if the mailbox overfills the response
    pub fn write(&self, text: impl AsRef<[u8]>) -> ConsoleResult<usize> {
        let text = text.as_ref();
        let mut inner = self.inner.lock();

        if text.len() > INPUT_CAPACITY {
            return Err(ConsoleError::InputTooLarge {
                len: text.len(),
                capacity: INPUT_CAPACITY,
            });
        }

        let bytes = hex::parse(text, REQUEST_CAPACITY)?;
        let request = request::build(&bytes)?;

        if inner.pending.take().is_some() {
            debug!("discarding unread response");
        }

        trace!(wire = ?request.to_wire().as_slice(), "sending raw request");
        let response = inner.mailbox.send(&request).map_err(|e| {
            warn!(
                msg_type = request.msg_type(),
                command = request.command(),
                error = %e,
                "mailbox request failed"
            );
            e
        })?;

        if response.len() > request.response_capacity() {
            warn!(
                len = response.len(),
                capacity = request.response_capacity(),
                "mailbox overfilled response"
            );
            return Err(ConsoleError::ResponseOverflow {
                len: response.len(),
                capacity: request.response_capacity(),
            });
        }

        debug!(len = response.len(), "buffered mailbox response");
        inner.pending = Some(response);

        Ok(text.len())
    }

    /// Take the unread response as a hex dump
    ///
    /// Returns an empty string when nothing is pending; a response is
    /// returned by exactly one read.
    pub fn read(&self) -> String {
        let mut inner = self.inner.lock();
        match inner.pending.take() {
            Some(response) => {
                debug!(len = response.len(), "delivering buffered response");
                dump::format_with(response.as_bytes(), response.len(), self.dump_options)
            }
            None => String::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.inner.lock().pending.is_some() {
            SessionState::HasResponse
        } else {
            SessionState::Idle
        }
    }

    pub fn has_unread_response(&self) -> bool {
        self.state() == SessionState::HasResponse
    }

    pub fn dump_options(&self) -> DumpOptions {
        self.dump_options
    }

    /// Run `f` against the mailbox while holding the session lock
    pub fn with_mailbox<R>(&self, f: impl FnOnce(&mut M) -> R) -> R {
        f(&mut self.inner.lock().mailbox)
    }

    pub fn into_mailbox(self) -> M {
        self.inner.into_inner().mailbox
    }
}

impl<M: Mailbox> RawConsole for DebugSession<M> {
    fn write(&self, text: &[u8]) -> ConsoleResult<usize> {
        DebugSession::write(self, text)
    }

    fn read(&self) -> String {
        DebugSession::read(self)
    }
}

impl<C: RawConsole + ?Sized> RawConsole for Arc<C> {
    fn write(&self, text: &[u8]) -> ConsoleResult<usize> {
        (**self).write(text)
    }

    fn read(&self) -> String {
        (**self).read()
    }
}

impl<C: RawConsole + ?Sized> RawConsole for &C {
    fn write(&self, text: &[u8]) -> ConsoleResult<usize> {
        (**self).write(text)
    }

    fn read(&self) -> String {
        (**self).read()
    }
}

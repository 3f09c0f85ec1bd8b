// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # ecdebug-session
//!
//! Stateful core of the raw debug console: a [`DebugSession`] owns the single
//! pending response, serializes writers and readers, and hands each response
//! out exactly once.
//!
//! ## Architecture
//!
//! 1. **Transport**: the [`Mailbox`] contract the controller glue implements
//! 2. **Session**: write/read state machine over a mailbox
//! 3. **Handle**: [`ConsoleHandle`], a per-open `std::io` adapter for the
//!    filesystem glue
//!
//! ## Example
//!
//! ```rust
//! use ecdebug_session::{DebugSession, LoopbackMailbox};
//!
//! let session = DebugSession::new(LoopbackMailbox::new());
//! session.write("00 f0 38 00 03 00")?;
//!
//! let dump = session.read();
//! assert!(dump.starts_with("00000000: 00 f0 38 00 03 00"));
//! assert!(session.read().is_empty());
//! # Ok::<(), ecdebug_session::ConsoleError>(())
//! ```

pub mod error;
pub mod handle;
pub mod session;
pub mod transport;

pub use error::{ConsoleError, ConsoleResult};
pub use handle::ConsoleHandle;
pub use session::{DebugSession, RawConsole, SessionState};
pub use transport::{LoopbackMailbox, Mailbox, TransportError, TransportResult};

/// Re-export for transport implementations
pub use ecdebug_protocol as protocol;

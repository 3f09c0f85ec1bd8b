// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # ecdebug - raw debug console for an embedded controller mailbox
//!
//! A developer writes a line of hex words; the first two bytes select the
//! message type, the third is the command, the rest is payload. The request
//! goes to the controller over a [`Mailbox`](session::Mailbox), and the next
//! read returns the controller's answer once, as a hex dump.
//!
//! ## Feature Flags
//!
//! - **`config`** (default): `ecdebug.toml` loading with environment and CLI
//!   overrides
//! - **`observability`** (default): `tracing-subscriber` setup and
//!   `--debug-{crate}` flags
//!
//! ## Usage
//!
//! ```rust
//! use ecdebug::prelude::*;
//!
//! let session = DebugSession::new(LoopbackMailbox::new());
//! session.write("00 f0 38 00 03 00")?;
//!
//! let dump = session.read();
//! assert!(dump.starts_with("00000000: 00 f0 38 00 03 00"));
//! assert!(session.read().is_empty());
//! # Ok::<(), ConsoleError>(())
//! ```
//!
//! With configuration:
//!
//! ```rust,no_run
//! use ecdebug::prelude::*;
//!
//! let config = ecdebug::config::load_config(None, None).expect("Failed to load config");
//! let session = ecdebug::open_session(LoopbackMailbox::new(), &config);
//! ```

pub use ecdebug_protocol as protocol;
pub use ecdebug_session as session;

#[cfg(feature = "config")]
pub use ecdebug_config as config;

#[cfg(feature = "observability")]
pub use ecdebug_observability as observability;

#[cfg(feature = "config")]
use ecdebug_config::{ConsoleConfig, DumpConfig, EcDebugConfig};
#[cfg(feature = "config")]
use ecdebug_protocol::DumpOptions;
#[cfg(feature = "config")]
use ecdebug_session::{DebugSession, Mailbox};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dump columns selected by the `[dump]` section
#[cfg(feature = "config")]
pub fn dump_options(config: &DumpConfig) -> DumpOptions {
    DumpOptions {
        offsets: config.offsets,
        ascii: config.ascii,
    }
}

/// Debug filesystem path of the console node, relative to the mount point
#[cfg(feature = "config")]
pub fn node_path(config: &ConsoleConfig) -> String {
    format!("{}/{}", config.directory, config.name)
}

/// Create a session over `mailbox` rendering dumps as configured
#[cfg(feature = "config")]
pub fn open_session<M: Mailbox>(mailbox: M, config: &EcDebugConfig) -> DebugSession<M> {
    tracing::info!(
        node = %node_path(&config.console),
        offsets = config.dump.offsets,
        ascii = config.dump.ascii,
        "opening raw debug console"
    );
    DebugSession::with_dump_options(mailbox, dump_options(&config.dump))
}

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::protocol::{DumpOptions, MessageType, Request, RequestFlags, Response};
    pub use crate::session::{
        ConsoleError, ConsoleHandle, ConsoleResult, DebugSession, LoopbackMailbox, Mailbox,
        RawConsole, SessionState, TransportError, TransportResult,
    };

    #[cfg(feature = "config")]
    pub use crate::config::EcDebugConfig;
}

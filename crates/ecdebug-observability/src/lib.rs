// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # ecdebug-observability
//!
//! Logging setup for the raw debug console tools, with per-crate debug flag
//! support.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Workspace crate names accepted by `--debug-{crate}`
pub const KNOWN_CRATES: &[&str] = &[
    "ecdebug",
    "ecdebug-protocol",
    "ecdebug-session",
    "ecdebug-config",
    "ecdebug-observability",
];

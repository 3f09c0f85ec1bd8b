// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # EC Debug Console Configuration
//!
//! Type-safe configuration for the raw debug console:
//! - TOML file parsing (`ecdebug.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ecdebug_config::load_config;
//!
//! // Defaults apply when no ecdebug.toml is found
//! let config = load_config(None, None).expect("Failed to load config");
//!
//! println!("Console node: {}/{}", config.console.directory, config.console.name);
//! println!("Log level: {}", config.logging.level);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "ecdebug.toml";

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_cli_overrides, apply_environment_overrides, find_config_file, load_config};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

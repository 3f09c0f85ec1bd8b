// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output only, on stderr so dumps on stdout stay clean.

use anyhow::{anyhow, Context, Result};
use ecdebug_config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Build the filter from the configured level and per-crate flags
///
/// # Errors
///
/// Fails if the resulting directive string is not a valid filter
pub fn build_filter(config: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<EnvFilter> {
    let directives = debug_flags.to_filter_string(&config.level);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {}", directives))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Fails on an invalid filter, or if a global subscriber is already set
pub fn init_logging(config: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<()> {
    let filter = build_filter(config, debug_flags)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug_flags.any_enabled());

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!(
        level = %config.level,
        format = %config.format,
        debug_crates = debug_flags.enabled_crates.len(),
        "logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str, format: LogFormat) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format,
        }
    }

    #[test]
    fn test_build_filter() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-ecdebug-session".to_string()]);
        let filter = build_filter(&logging("warn", LogFormat::Text), &flags).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("ecdebug_session=debug"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn test_init_only_once() {
        let config = logging("info", LogFormat::Json);
        let flags = CrateDebugFlags::default();
        assert!(init_logging(&config, &flags).is_ok());
        assert!(init_logging(&config, &flags).is_err());
    }
}

// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section of `ecdebug.toml`. Every section and field
//! is optional; missing entries take the defaults below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EcDebugConfig {
    pub console: ConsoleConfig,
    pub dump: DumpConfig,
    pub logging: LoggingConfig,
}

/// Where the console node is published
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Node name inside `directory`
    pub name: String,
    /// Debug filesystem directory holding the node
    pub directory: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            name: "raw".to_string(),
            directory: "wilco_ec".to_string(),
        }
    }
}

/// Hex dump columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Prefix each line with its byte offset
    pub offsets: bool,
    /// Append the printable-ASCII column
    pub ascii: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            offsets: true,
            ascii: true,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level: trace, debug, info, warn or error
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Log line encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: EcDebugConfig = toml::from_str("").unwrap();
        assert_eq!(config, EcDebugConfig::default());
        assert_eq!(config.console.name, "raw");
        assert_eq!(config.console.directory, "wilco_ec");
        assert!(config.dump.offsets && config.dump.ascii);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_partial_section() {
        let config: EcDebugConfig = toml::from_str(
            r#"
            [dump]
            ascii = false

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert!(config.dump.offsets);
        assert!(!config.dump.ascii);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("yaml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}

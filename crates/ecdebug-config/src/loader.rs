// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later ones winning:
//! 1. TOML file (or built-in defaults when none is found)
//! 2. Environment variables
//! 3. CLI arguments

use crate::{validate_config, ConfigError, ConfigResult, EcDebugConfig, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "ECDEBUG_CONFIG_PATH";

/// Find the console configuration file
///
/// Search order:
/// 1. `ECDEBUG_CONFIG_PATH` environment variable
/// 2. Current working directory: `./ecdebug.toml`
/// 3. Up to five parent directories
///
/// Returns `Ok(None)` when the search finds nothing.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if `ECDEBUG_CONFIG_PATH` names a file
/// that does not exist
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var(CONFIG_PATH_VAR) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(Some(path));
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by {} not found: {}",
                CONFIG_PATH_VAR,
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        search_paths.extend(
            cwd.ancestors()
                .skip(1)
                .take(5)
                .map(|dir| dir.join(CONFIG_FILE_NAME)),
        );
    }

    Ok(search_paths.into_iter().find(|path| path.exists()))
}

/// Load, override and validate the configuration
///
/// # Arguments
///
/// * `config_path` - Explicit config file. If `None`, the file is searched for
///   and defaults are used when none is found.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if an explicit config file is missing, the file contains
/// invalid TOML, or the final configuration fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<EcDebugConfig> {
    let config_file = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            Some(path.to_path_buf())
        }
        None => find_config_file()?,
    };

    let mut config = match config_file {
        Some(file) => {
            let content = fs::read_to_string(&file)?;
            toml::from_str(&content)?
        }
        None => EcDebugConfig::default(),
    };

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    validate_config(&config)?;

    Ok(config)
}

fn parse_flag(value: &str) -> bool {
    let value = value.to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `ECDEBUG_LOG_LEVEL` -> `logging.level`
/// - `ECDEBUG_LOG_FORMAT` -> `logging.format` (ignored unless text or json)
/// - `ECDEBUG_DUMP_OFFSETS` -> `dump.offsets`
/// - `ECDEBUG_DUMP_ASCII` -> `dump.ascii`
/// - `ECDEBUG_CONSOLE_NAME` -> `console.name`
pub fn apply_environment_overrides(config: &mut EcDebugConfig) {
    if let Ok(value) = env::var("ECDEBUG_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("ECDEBUG_LOG_FORMAT") {
        if let Ok(format) = value.parse() {
            config.logging.format = format;
        }
    }
    if let Ok(value) = env::var("ECDEBUG_DUMP_OFFSETS") {
        config.dump.offsets = parse_flag(&value);
    }
    if let Ok(value) = env::var("ECDEBUG_DUMP_ASCII") {
        config.dump.ascii = parse_flag(&value);
    }
    if let Ok(value) = env::var("ECDEBUG_CONSOLE_NAME") {
        config.console.name = value;
    }
}

/// Apply CLI argument overrides to configuration
///
/// Recognized keys: `log_level`, `log_format`, `dump_offsets`, `dump_ascii`,
/// `console_name`.
pub fn apply_cli_overrides(config: &mut EcDebugConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_format") {
        if let Ok(format) = value.parse() {
            config.logging.format = format;
        }
    }
    if let Some(value) = cli_args.get("dump_offsets") {
        config.dump.offsets = parse_flag(value);
    }
    if let Some(value) = cli_args.get("dump_ascii") {
        config.dump.ascii = parse_flag(value);
    }
    if let Some(value) = cli_args.get("console_name") {
        config.console.name = value.clone();
    }
}

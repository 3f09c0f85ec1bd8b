// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation

use crate::{ConfigError, ConfigResult, EcDebugConfig};

/// Levels accepted by `logging.level`
pub const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks that the console node name is usable as a single path component
/// and that the log level is one of [`KNOWN_LEVELS`].
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &EcDebugConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

/// Every validation problem in `config`, in section order
pub fn collect_errors(config: &EcDebugConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_console(config, &mut errors);
    validate_logging(config, &mut errors);
    errors
}

fn validate_console(config: &EcDebugConfig, errors: &mut Vec<ConfigValidationError>) {
    let name = &config.console.name;
    if name.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "console.name".to_string(),
        });
    } else if name.contains('/') {
        errors.push(ConfigValidationError::InvalidValue {
            field: "console.name".to_string(),
            reason: format!("'{}' must not contain '/'", name),
        });
    }

    if config.console.directory.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "console.directory".to_string(),
        });
    }
}

fn validate_logging(config: &EcDebugConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !KNOWN_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                config.logging.level,
                KNOWN_LEVELS.join(", ")
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_case_insensitive() {
        let mut config = EcDebugConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_level() {
        let mut config = EcDebugConfig::default();
        config.logging.level = "verbose".to_string();
        let errors = collect_errors(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("logging.level"));
    }

    #[test]
    fn test_console_name_rules() {
        let mut config = EcDebugConfig::default();
        config.console.name = String::new();
        assert_eq!(
            collect_errors(&config),
            vec![ConfigValidationError::MissingRequired {
                field: "console.name".to_string()
            }]
        );

        config.console.name = "raw/extra".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(msg)) if msg.contains("must not contain '/'")
        ));
    }

    #[test]
    fn test_reports_every_problem() {
        let mut config = EcDebugConfig::default();
        config.console.name = String::new();
        config.console.directory = String::new();
        config.logging.level = "loud".to_string();
        assert_eq!(collect_errors(&config).len(), 3);
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitrc.
//!
//! Every error here is raised while a rule table is being built or loaded.
//! Lookups on a finished table never fail.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitrc operations.
#[derive(Error, Debug)]
pub enum CommitrcError {
    // Configuration file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Rule definition errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration file errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Unknown base ruleset: '{name}'")]
    UnknownBase { name: String },
}

/// Errors in a single rule definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid rule specification for '{rule}' ({field}): {message}")]
    InvalidSpec {
        rule: String,
        field: &'static str,
        message: String,
    },

    #[error("Invalid rule name: '{rule}'")]
    InvalidName { rule: String },

    #[error("Rule defined more than once: '{rule}'")]
    Duplicate { rule: String },
}

impl RuleError {
    /// Shorthand for an [`RuleError::InvalidSpec`].
    pub fn invalid(rule: &str, field: &'static str, message: impl Into<String>) -> Self {
        RuleError::InvalidSpec {
            rule: rule.to_string(),
            field,
            message: message.into(),
        }
    }

    /// The rule the error refers to.
    pub fn rule(&self) -> &str {
        match self {
            RuleError::InvalidSpec { rule, .. }
            | RuleError::InvalidName { rule }
            | RuleError::Duplicate { rule } => rule,
        }
    }
}

/// Result type alias for commitrc operations.
pub type Result<T> = std::result::Result<T, CommitrcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CommitrcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/commitlint.toml"),
        };
        assert!(err.to_string().contains("/path/to/commitlint.toml"));
    }

    #[test]
    fn test_invalid_spec_names_rule_and_field() {
        let err = RuleError::invalid("header-max-length", "limit", "must be positive");
        let text = err.to_string();
        assert!(text.contains("Invalid rule specification"));
        assert!(text.contains("header-max-length"));
        assert!(text.contains("limit"));
        assert_eq!(err.rule(), "header-max-length");
    }

    #[test]
    fn test_commitrc_error_from_rule_error() {
        let rule_err = RuleError::Duplicate {
            rule: "type-enum".to_string(),
        };
        let err: CommitrcError = rule_err.into();
        assert!(err.to_string().contains("type-enum"));
    }

    #[test]
    fn test_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.context("Failed to read config").unwrap_err();
        assert_eq!(err.to_string(), "Failed to read config: denied");
    }
}

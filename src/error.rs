//! Unified error types for clitree
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A command, option or param was declared incorrectly
    #[error("Invalid definition: {0}")]
    Definition(#[from] DefinitionError),

    /// The tokenizer rejected the raw arguments
    #[error("Tokenizer error: {0}")]
    Tokenize(#[from] TokenizeError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command was matched but has no handler to run
    #[error("Command '{0}' has no handler")]
    MissingHandler(String),

    /// No command exists at the requested path
    #[error("No command at path: {0}")]
    UnknownPath(String),

    /// A handler reported a failure
    #[error("Handler failed: {0}")]
    Handler(String),

    /// IO error (file operations, output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building a command tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Command name is empty
    #[error("Name is required for commands")]
    EmptyCommandName,

    /// Option short id is empty
    #[error("Short id is required for options")]
    EmptyOptionShort,

    /// Param name is empty
    #[error("Name is required for params")]
    EmptyParamName,

    /// The child is already registered under another command
    #[error("Command '{child}' already has parent '{parent}'")]
    AlreadyParented { child: String, parent: String },

    /// Linking would make a command its own ancestor
    #[error("Linking '{child}' under '{parent}' would create a cycle")]
    Cycle { child: String, parent: String },

    /// The id does not belong to this tree
    #[error("Unknown command id: {0}")]
    UnknownCommand(usize),
}

/// Errors reported by a tokenizer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A token could not be interpreted
    #[error("Malformed token '{0}'")]
    Malformed(String),
}

/// Errors from configuration and definition file loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_error_display() {
        let err = DefinitionError::AlreadyParented {
            child: "remote".to_string(),
            parent: "git".to_string(),
        };
        assert_eq!(err.to_string(), "Command 'remote' already has parent 'git'");
    }

    #[test]
    fn test_empty_name_display() {
        let err = DefinitionError::EmptyCommandName;
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_config_value_error_display() {
        let err = ConfigError::InvalidValue {
            key: "usage.column_gap".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("usage.column_gap"));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_error_conversion() {
        let err: AppError = DefinitionError::EmptyParamName.into();
        assert!(matches!(err, AppError::Definition(_)));

        let err: AppError = TokenizeError::Malformed("-".to_string()).into();
        assert!(matches!(err, AppError::Tokenize(_)));
    }
}

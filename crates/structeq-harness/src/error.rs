//! Error types for harness configuration

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading the harness configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A style name that matches no assertion style
    #[error("unknown assertion style '{name}' (expected one of: manual, native, deep, json)")]
    UnknownStyle { name: String },

    /// The style list was set but named no style
    #[error("{var} is set but names no assertion style")]
    NoStyles { var: String },

    /// Invalid configuration value
    #[error("invalid value for '{var}': {reason}")]
    InvalidValue { var: String, reason: String },
}

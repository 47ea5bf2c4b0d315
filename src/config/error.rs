//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid service URL format")]
    InvalidServiceUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Progress tick interval must be positive")]
    InvalidProgressTick,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

//! Configuration error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid build target: {0}. Expected: development, staging, or production")]
    InvalidTarget(String),

    #[error("Configuration source error: {0}")]
    Source(#[from] ::config::ConfigError),

    #[error("Missing required value: {field}")]
    MissingValue { field: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment configuration is already installed")]
    AlreadyInstalled,
}

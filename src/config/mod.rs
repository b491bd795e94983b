//! Configuration management module
//!
//! This module handles loading and validating the environment configuration
//! from build target defaults, config files, environment variables and
//! .env files.

pub mod global;
pub mod loader;
pub mod settings;
pub mod target;
pub mod validation;

pub use loader::{ConfigLoader, CONFIG_FILE_ENV_VAR, DEFAULT_ENV_PREFIX};
pub use settings::{AuthConfig, EnvironmentConfig};
pub use target::{BuildTarget, TARGET_ENV_VAR};

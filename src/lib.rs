//! Coffee shop environment configuration library

// Public modules
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

// Re-export commonly used types
pub use crate::config::{AuthConfig, BuildTarget, ConfigLoader, EnvironmentConfig};
pub use crate::error::ConfigError;
pub use crate::render::OutputFormat;

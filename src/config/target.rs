//! Build targets
//!
//! A build target names the deployment context a configuration is loaded
//! for. It selects the built-in defaults and the `production` flag.

use clap::ValueEnum;
use std::fmt;

use crate::config::settings::{AuthConfig, EnvironmentConfig};
use crate::error::ConfigError;

/// Environment variable selecting the build target
pub const TARGET_ENV_VAR: &str = "COFFEE_ENVIRONMENT";

/// Deployment context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BuildTarget {
    #[default]
    #[value(alias = "dev")]
    Development,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildTarget::Development => write!(f, "development"),
            BuildTarget::Staging => write!(f, "staging"),
            BuildTarget::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for BuildTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(BuildTarget::Development),
            "staging" | "stage" => Ok(BuildTarget::Staging),
            "production" | "prod" => Ok(BuildTarget::Production),
            _ => Err(ConfigError::InvalidTarget(s.to_string())),
        }
    }
}

impl BuildTarget {
    /// Resolve the target from `COFFEE_ENVIRONMENT`, falling back to development
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(TARGET_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(BuildTarget::default()),
        }
    }

    /// Built-in values for this target
    ///
    /// Only development ships endpoint values; staging and production must
    /// be supplied by a config file or environment variables.
    pub fn defaults(&self) -> EnvironmentConfig {
        match self {
            BuildTarget::Development => EnvironmentConfig {
                production: false,
                api_server_url: "http://127.0.0.1:5000".to_string(),
                auth: AuthConfig {
                    domain_prefix: "dev-bzhj0wwun42rcd82".to_string(),
                    audience: "coffee".to_string(),
                    client_id: "zhsNepVPEht8NrxeEUR8K108n6PIm3JD".to_string(),
                    callback_url: "http://localhost:8100".to_string(),
                },
            },
            BuildTarget::Staging => EnvironmentConfig {
                production: false,
                api_server_url: String::new(),
                auth: AuthConfig::default(),
            },
            BuildTarget::Production => EnvironmentConfig {
                production: true,
                api_server_url: String::new(),
                auth: AuthConfig::default(),
            },
        }
    }
}

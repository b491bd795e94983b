//! Renderers module
//!
//! Emits a loaded [`EnvironmentConfig`] in a form a build step can consume:
//! - `json`: camelCase JSON document
//! - `env`: dotenv file the loader can read back
//! - `typescript`: the front end's `environment.ts` module

pub mod dotenv;
pub mod typescript;

use clap::ValueEnum;
use serde_json::json;
use std::fmt;

use crate::config::EnvironmentConfig;

/// Output format for a rendered configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    #[value(alias = "dotenv")]
    Env,
    #[value(alias = "ts")]
    Typescript,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Env => write!(f, "env"),
            OutputFormat::Typescript => write!(f, "typescript"),
        }
    }
}

/// Render `config` in the requested format
pub fn render(config: &EnvironmentConfig, format: OutputFormat, env_prefix: &str) -> String {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Env => dotenv::render(config, env_prefix),
        OutputFormat::Typescript => typescript::render(config),
    }
}

/// Pretty JSON using the front end's camelCase field names
pub fn to_json(config: &EnvironmentConfig) -> String {
    let value = json!({
        "production": config.production,
        "apiServerUrl": config.api_server_url,
        "auth": {
            "domainPrefix": config.auth.domain_prefix,
            "audience": config.auth.audience,
            "clientId": config.auth.client_id,
            "callbackUrl": config.auth.callback_url,
        }
    });
    // Serializing a `Value` cannot fail
    let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
    out.push('\n');
    out
}

//! Layered configuration loader
//!
//! Sources are applied lowest to highest precedence:
//! 1. built-in defaults of the build target
//! 2. an optional config file (TOML, JSON or YAML, picked by extension)
//! 3. `<PREFIX>_*` environment variables, `__` separating nested keys
//!
//! A source only overrides the keys it names. Config files may use either
//! the snake_case field names or the camelCase names the JSON renderer
//! writes (`apiServerUrl`, `auth.clientId`, ...).

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::settings::EnvironmentConfig;
use crate::config::target::BuildTarget;
use crate::error::ConfigError;

/// Default prefix for configuration environment variables
pub const DEFAULT_ENV_PREFIX: &str = "COFFEE";

/// Environment variable naming a config file when none is set explicitly
pub const CONFIG_FILE_ENV_VAR: &str = "COFFEE_CONFIG_FILE";

/// Keys a config file sets, normalized to snake_case before layering
///
/// Aliases cover camelCase and its lowercased form, since key case is not
/// preserved by every file source.
#[derive(Debug, Deserialize, Serialize)]
struct FileLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    production: Option<bool>,
    #[serde(
        alias = "apiServerUrl",
        alias = "apiserverurl",
        skip_serializing_if = "Option::is_none"
    )]
    api_server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth: Option<AuthLayer>,
}

#[derive(Debug, Deserialize, Serialize)]
struct AuthLayer {
    #[serde(
        alias = "domainPrefix",
        alias = "domainprefix",
        skip_serializing_if = "Option::is_none"
    )]
    domain_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audience: Option<String>,
    #[serde(
        alias = "clientId",
        alias = "clientid",
        skip_serializing_if = "Option::is_none"
    )]
    client_id: Option<String>,
    #[serde(
        alias = "callbackUrl",
        alias = "callbackurl",
        skip_serializing_if = "Option::is_none"
    )]
    callback_url: Option<String>,
}

fn read_file_layer(path: &Path) -> Result<Config, ConfigError> {
    let layer: FileLayer = Config::builder()
        .add_source(File::from(path).required(true))
        .build()?
        .try_deserialize()?;
    Ok(Config::try_from(&layer)?)
}

/// Builder for [`EnvironmentConfig`]
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    target: Option<BuildTarget>,
    file: Option<PathBuf>,
    env_prefix: String,
    use_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            target: None,
            file: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            use_env: true,
        }
    }

    /// Pin the build target instead of reading `COFFEE_ENVIRONMENT`
    pub fn with_target(mut self, target: BuildTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Layer a config file over the target defaults; the file must exist
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Ignore environment variables entirely, including the target and file selectors
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    fn resolve_target(&self) -> Result<BuildTarget, ConfigError> {
        match self.target {
            Some(target) => Ok(target),
            None if self.use_env => BuildTarget::from_env(),
            None => Ok(BuildTarget::default()),
        }
    }

    fn resolve_file(&self) -> Option<PathBuf> {
        if self.file.is_some() {
            return self.file.clone();
        }
        if !self.use_env {
            return None;
        }
        std::env::var(CONFIG_FILE_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Build the configuration record
    ///
    /// Fails only when a source is malformed. Empty values are returned as
    /// they are; see [`EnvironmentConfig::validate`] for fail-fast checks.
    pub fn load(&self) -> Result<EnvironmentConfig, ConfigError> {
        let target = self.resolve_target()?;
        tracing::debug!(target = %target, "Applying build target defaults");

        let mut builder = Config::builder().add_source(Config::try_from(&target.defaults())?);

        if let Some(path) = self.resolve_file() {
            tracing::debug!(path = %path.display(), "Applying config file");
            builder = builder.add_source(read_file_layer(&path)?);
        }

        if self.use_env {
            tracing::debug!(prefix = %self.env_prefix, "Applying environment variables");
            builder = builder.add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        let config: EnvironmentConfig = builder.build()?.try_deserialize()?;

        tracing::debug!(
            target = %target,
            production = config.production,
            api_server_url = %config.api_server_url,
            "Environment configuration loaded"
        );

        Ok(config)
    }
}

//! Environment configuration record
//!
//! This module defines the deployment-specific settings the application is
//! wired up with: the backend API server URL and the identifiers passed to
//! the external authentication provider.

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigLoader;
use crate::config::target::BuildTarget;
use crate::error::ConfigError;

/// Authentication provider settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Tenant prefix of the provider domain (e.g. `dev-bzhj0wwun42rcd82`)
    #[serde(default)]
    pub domain_prefix: String,
    /// Identifier of the protected API
    #[serde(default)]
    pub audience: String,
    /// Identifier of the registered client application
    #[serde(default)]
    pub client_id: String,
    /// Where the provider redirects after login
    #[serde(default)]
    pub callback_url: String,
}

impl AuthConfig {
    /// Full provider domain, e.g. `dev-bzhj0wwun42rcd82.auth0.com`
    pub fn domain(&self) -> String {
        format!("{}.auth0.com", self.domain_prefix)
    }

    /// The redirect target, exactly as configured
    pub fn redirect_uri(&self) -> &str {
        &self.callback_url
    }
}

/// Main environment configuration
///
/// Built once at startup by [`EnvironmentConfig::load`] or a
/// [`ConfigLoader`], then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub production: bool,
    /// Base URL of the backend service
    #[serde(default)]
    pub api_server_url: String,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl EnvironmentConfig {
    /// Load the configuration for the current deployment context
    ///
    /// Reads a `.env` file if one exists, then layers target defaults, the
    /// optional config file and `COFFEE_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignored in production typically)
        dotenvy::dotenv().ok();

        ConfigLoader::new().load()
    }

    /// Join a request path onto the API server URL
    ///
    /// Exactly one `/` separates the two, whatever either side carries.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_server_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    pub fn is_production(&self) -> bool {
        self.production
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        BuildTarget::default().defaults()
    }
}

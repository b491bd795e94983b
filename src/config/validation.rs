//! Fail-fast checks for consuming applications
//!
//! Loading never rejects placeholder or empty values. Applications that want
//! to refuse a half-configured deployment call [`EnvironmentConfig::validate`]
//! at startup.

use url::Url;

use crate::config::settings::EnvironmentConfig;
use crate::error::ConfigError;

impl EnvironmentConfig {
    /// Check that every field is present and both URLs are absolute
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("api_server_url", &self.api_server_url),
            ("auth.domain_prefix", &self.auth.domain_prefix),
            ("auth.audience", &self.auth.audience),
            ("auth.client_id", &self.auth.client_id),
            ("auth.callback_url", &self.auth.callback_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingValue {
                    field: field.to_string(),
                });
            }
            // Values are used verbatim, so padding would leak into URLs
            if value.trim() != value.as_str() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must not have leading or trailing whitespace".to_string(),
                });
            }
        }

        let api = parse_absolute("api_server_url", &self.api_server_url)?;
        if api.scheme() != "http" && api.scheme() != "https" {
            return Err(ConfigError::InvalidValue {
                field: "api_server_url".to_string(),
                message: format!("scheme must be http or https, got: {}", api.scheme()),
            });
        }
        if api.host_str().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "api_server_url".to_string(),
                message: "host is required".to_string(),
            });
        }

        parse_absolute("auth.callback_url", &self.auth.callback_url)?;

        // Warn if production traffic goes over plain http
        if self.is_production() && api.scheme() == "http" {
            tracing::warn!(
                api_server_url = %self.api_server_url,
                "Production configuration uses an unencrypted API server URL"
            );
        }

        Ok(())
    }
}

/// `Url::parse` only succeeds for absolute URIs
///
/// `localhost:8100` parses too, with `localhost` as the scheme and `8100`
/// as an opaque path; that shape is a host and port missing its scheme.
fn parse_absolute(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("must be an absolute URI: {}", e),
    })?;

    let path = parsed.path();
    if !parsed.has_host() && !path.is_empty() && path.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!(
                "looks like host:port without a scheme (e.g. http://{})",
                raw
            ),
        });
    }

    Ok(parsed)
}

//! Process-wide configuration instance
//!
//! The application installs exactly one [`EnvironmentConfig`] at startup.
//! Once installed it never changes and can be read from any thread.

use std::sync::OnceLock;

use crate::config::settings::EnvironmentConfig;
use crate::error::ConfigError;

static INSTANCE: OnceLock<EnvironmentConfig> = OnceLock::new();

/// Install the process-wide configuration
///
/// Fails with [`ConfigError::AlreadyInstalled`] if one is already in place.
pub fn install(config: EnvironmentConfig) -> Result<&'static EnvironmentConfig, ConfigError> {
    INSTANCE
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;

    let installed = get().ok_or(ConfigError::AlreadyInstalled)?;
    tracing::info!(
        production = installed.production,
        api_server_url = %installed.api_server_url,
        "Environment configuration installed"
    );
    Ok(installed)
}

pub fn get() -> Option<&'static EnvironmentConfig> {
    INSTANCE.get()
}

/// Return the installed configuration, loading it on first use
pub fn get_or_load() -> Result<&'static EnvironmentConfig, ConfigError> {
    if let Some(config) = get() {
        return Ok(config);
    }
    let config = EnvironmentConfig::load()?;
    match install(config) {
        Ok(config) => Ok(config),
        // Lost a race with another thread; its value wins
        Err(ConfigError::AlreadyInstalled) => get().ok_or(ConfigError::AlreadyInstalled),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_clean_env;
    use serial_test::serial;

    // The slot is process-wide, so everything touching it lives in one test.
    #[test]
    #[serial]
    fn test_install_once() {
        assert!(get().is_none());

        let loaded = with_clean_env(&[("COFFEE_AUTH__AUDIENCE", "menu")], get_or_load).unwrap();
        assert_eq!(loaded.auth.audience, "menu");
        assert_eq!(loaded.api_server_url, "http://127.0.0.1:5000");

        // Later environment changes do not reach the installed value
        let again = with_clean_env(&[("COFFEE_AUTH__AUDIENCE", "drinks")], get_or_load).unwrap();
        assert!(std::ptr::eq(loaded, again));

        let mut other = EnvironmentConfig::default();
        other.api_server_url = "http://10.0.0.9:5000".to_string();
        assert!(matches!(install(other), Err(ConfigError::AlreadyInstalled)));
        assert_eq!(get(), Some(loaded));

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| get().map(|c| c.auth.audience.clone())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_deref(), Some("menu"));
        }
    }
}

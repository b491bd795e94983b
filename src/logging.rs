//! Logging setup
//!
//! JSON tracing output on stderr, so rendered configuration on stdout stays
//! clean for redirection.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Build the filter from RUST_LOG, falling back to `log_level`
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Initialize the global tracing subscriber
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_tracing(log_level: &str) {
    let console_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_filter(build_filter(log_level));

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_filter_falls_back_to_level() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert_eq!(build_filter("debug").to_string(), "debug");
        });
    }

    #[test]
    #[serial]
    fn test_filter_prefers_rust_log() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            assert_eq!(build_filter("debug").to_string(), "warn");
        });
    }

    #[test]
    fn test_init_twice() {
        init_tracing("info");
        init_tracing("debug");
    }
}

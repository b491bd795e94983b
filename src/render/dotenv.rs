//! Dotenv rendering
//!
//! Output uses the same variable names the loader reads, so a rendered file
//! can be sourced or loaded with `dotenvy` to reproduce the configuration.

use crate::config::EnvironmentConfig;

pub fn render(config: &EnvironmentConfig, prefix: &str) -> String {
    let entries = [
        ("PRODUCTION", config.production.to_string()),
        ("API_SERVER_URL", config.api_server_url.clone()),
        ("AUTH__DOMAIN_PREFIX", config.auth.domain_prefix.clone()),
        ("AUTH__AUDIENCE", config.auth.audience.clone()),
        ("AUTH__CLIENT_ID", config.auth.client_id.clone()),
        ("AUTH__CALLBACK_URL", config.auth.callback_url.clone()),
    ];

    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(&format!("{}_{}={}\n", prefix, key, quote(&value)));
    }
    out
}

/// Single quotes are literal in dotenv; fall back to escaped double quotes
/// only when the value itself holds a single quote.
fn quote(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

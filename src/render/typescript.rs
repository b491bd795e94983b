//! `environment.ts` rendering
//!
//! Produces the module the Ionic/Angular front end imports at build time.
//! Keys follow the front end's names (`auth0.url` carries the domain prefix,
//! `auth0.callbackURL` the callback).

use crate::config::EnvironmentConfig;

pub fn render(config: &EnvironmentConfig) -> String {
    let auth = &config.auth;
    format!(
        "export const environment = {{\n\
         \x20 production: {},\n\
         \x20 apiServerUrl: {},\n\
         \x20 auth0: {{\n\
         \x20   url: {},\n\
         \x20   audience: {},\n\
         \x20   clientId: {},\n\
         \x20   callbackURL: {},\n\
         \x20 }}\n\
         }};\n",
        config.production,
        literal(&config.api_server_url),
        literal(&auth.domain_prefix),
        literal(&auth.audience),
        literal(&auth.client_id),
        literal(&auth.callback_url),
    )
}

/// Single-quoted TypeScript string literal
fn literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

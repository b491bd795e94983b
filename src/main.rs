//! Coffee shop environment configuration CLI
//!
//! Loads the environment configuration for a build target and prints it in
//! a form the front-end build can consume.

use anyhow::{Context, Result};
use clap::Parser;
use coffee_shop_env::{
    config::{BuildTarget, ConfigLoader, DEFAULT_ENV_PREFIX},
    logging::init_tracing,
    render::{render, OutputFormat},
};
use std::path::PathBuf;

/// Coffee shop environment configuration
///
/// Resolves target defaults, an optional config file and COFFEE_* environment
/// variables into one configuration record.
#[derive(Parser, Debug)]
#[command(name = "coffee-shop-env")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Build target: dev, staging, prod (overrides COFFEE_ENVIRONMENT env var)
    #[arg(short, long, ignore_case = true)]
    env: Option<BuildTarget>,

    /// Config file layered over target defaults (overrides COFFEE_CONFIG_FILE env var)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Fail unless every field is set and both URLs are absolute
    #[arg(long)]
    check: bool,

    /// Write the rendered configuration here instead of stdout
    /// Example: --output frontend/src/environments/environment.ts
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level);

    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let mut loader = ConfigLoader::new();
    if let Some(target) = args.env {
        loader = loader.with_target(target);
    }
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }

    let config = loader.load().context("Failed to load environment configuration")?;

    if args.check {
        config.validate().context("Environment configuration is incomplete")?;
    }

    let rendered = render(&config, args.format, DEFAULT_ENV_PREFIX);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                format = %args.format,
                "Environment configuration written"
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

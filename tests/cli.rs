//! End-to-end tests for the coffee-shop-env binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const COFFEE_VARS: [&str; 8] = [
    "COFFEE_ENVIRONMENT",
    "COFFEE_CONFIG_FILE",
    "COFFEE_PRODUCTION",
    "COFFEE_API_SERVER_URL",
    "COFFEE_AUTH__DOMAIN_PREFIX",
    "COFFEE_AUTH__AUDIENCE",
    "COFFEE_AUTH__CLIENT_ID",
    "COFFEE_AUTH__CALLBACK_URL",
];

/// Binary running in an empty directory with no COFFEE_* variables
fn coffee_env(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coffee-shop-env").unwrap();
    cmd.current_dir(dir.path());
    for var in COFFEE_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_development_json() {
    let dir = TempDir::new().unwrap();
    let output = coffee_env(&dir).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["apiServerUrl"], "http://127.0.0.1:5000");
    assert_eq!(value["auth"]["callbackUrl"], "http://localhost:8100");
}

#[test]
fn test_env_var_override() {
    let dir = TempDir::new().unwrap();
    coffee_env(&dir)
        .env("COFFEE_API_SERVER_URL", "https://api.coffee.example")
        .args(["--format", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "COFFEE_API_SERVER_URL='https://api.coffee.example'",
        ));
}

#[test]
fn test_dotenv_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "COFFEE_AUTH__AUDIENCE=espresso\n").unwrap();
    coffee_env(&dir)
        .args(["--format", "ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("audience: 'espresso'"));
}

#[test]
fn test_check_fails_for_bare_production() {
    let dir = TempDir::new().unwrap();
    coffee_env(&dir)
        .args(["--env", "prod", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_server_url"));
}

#[test]
fn test_check_passes_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("production.toml");
    fs::write(
        &config,
        r#"
api_server_url = "https://api.coffee.example"

[auth]
domain_prefix = "coffee-prod.us"
audience = "coffee"
client_id = "prodclient"
callback_url = "https://coffee.example/login-results"
"#,
    )
    .unwrap();

    let out = dir.path().join("environment.prod.ts");
    coffee_env(&dir)
        .args(["--env", "prod", "--check", "--format", "typescript"])
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("production: true,"));
    assert!(written.contains("url: 'coffee-prod.us',"));
    assert!(written.contains("callbackURL: 'https://coffee.example/login-results',"));
}

#[test]
fn test_unknown_target_rejected() {
    let dir = TempDir::new().unwrap();
    coffee_env(&dir)
        .env("COFFEE_ENVIRONMENT", "qa")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build target"));
}

#[test]
fn test_env_flag_ignores_case() {
    let dir = TempDir::new().unwrap();
    coffee_env(&dir)
        .args(["--env", "PROD", "--format", "TS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("production: true,"));
}

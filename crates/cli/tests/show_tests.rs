//! Integration tests for `asde show`, `asde env`, and CLI overrides.

mod common;

use common::{asde_cmd, bare_cmd};
use predicates::prelude::*;

#[test]
fn test_show_json_reports_defaults() {
    let (mut cmd, creds) = asde_cmd();
    let output = cmd.args(["show", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["log_level"], "INFO");
    assert_eq!(value["system_id"], "asde-prod-001");
    assert_eq!(value["firebase"]["project_id"], "test-project");
    assert_eq!(
        value["firebase"]["credentials_path"],
        creds.path().display().to_string()
    );
    assert_eq!(value["data"]["market_data_source"], "ccxt");
    assert_eq!(value["data"]["cache_enabled"], true);
    assert_eq!(value["max_parallel_experiments"], 4);
    assert_eq!(value["simulation_timeout_seconds"], 300);
    assert_eq!(value["enable_causal_discovery"], true);
    assert_eq!(value["enable_live_trading"], false);
}

#[test]
fn test_show_table_reflects_env() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("ENABLE_LIVE_TRADING", "TRUE")
        .env("CACHE_ENABLED", "yes")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("KEY\tVALUE\n"))
        .stdout(predicate::str::contains("ENABLE_LIVE_TRADING\ttrue\n"))
        .stdout(predicate::str::contains("CACHE_ENABLED\tfalse\n"));
}

#[test]
fn test_flags_override_environment() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("SYSTEM_ID", "from-env")
        .args(["--system-id", "from-flag", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SYSTEM_ID\tfrom-flag\n"));
}

#[test]
fn test_credentials_flag_overrides_missing_file() {
    let creds = tempfile::NamedTempFile::new().unwrap();
    let mut cmd = bare_cmd();
    cmd.env("FIREBASE_PROJECT_ID", "test-project")
        .env("FIREBASE_CREDENTIALS", "/nonexistent/asde/creds.json")
        .arg("--credentials")
        .arg(creds.path())
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_env_lists_keys_without_configuration() {
    bare_cmd()
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("FIREBASE_PROJECT_ID"))
        .stdout(predicate::str::contains("SIMULATION_TIMEOUT_SECONDS\tinteger\t300\t>= 30"));
}

#[test]
fn test_env_json_is_an_array_of_keys() {
    let output = bare_cmd().args(["env", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys = value.as_array().unwrap();
    assert_eq!(keys.len(), 11);
    assert_eq!(keys[0]["name"], "LOG_LEVEL");
}

#[test]
fn test_logs_go_to_stderr_as_json() {
    let (mut cmd, _creds) = asde_cmd();
    let output = cmd
        .args(["--log-format", "json", "--log-level", "DEBUG", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    // stdout stays parseable; logs never land there
    serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration validated"));
    assert!(stderr.lines().all(|l| l.trim_start().starts_with('{')));
}

#[test]
fn test_live_trading_emits_warning() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("ENABLE_LIVE_TRADING", "true")
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"));
}

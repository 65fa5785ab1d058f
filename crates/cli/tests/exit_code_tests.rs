//! Integration tests for structured exit codes.
//!
//! These tests verify that asde fails fast at startup with an exit code per
//! configuration error kind and a message naming the offending key.

mod common;

use common::{asde_cmd, bare_cmd};
use predicates::prelude::*;

#[test]
fn test_valid_config_returns_exit_code_0() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("configuration OK (asde-prod-001)"));
}

#[test]
fn test_missing_project_id_returns_exit_code_3() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env_remove("FIREBASE_PROJECT_ID");
    cmd.arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Configuration error [FIREBASE_PROJECT_ID]",
        ));
}

#[test]
fn test_empty_project_id_returns_exit_code_3() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("FIREBASE_PROJECT_ID", "");
    cmd.arg("check").assert().code(3);
}

#[test]
fn test_padded_integer_returns_exit_code_7() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("MAX_DATA_POINTS", "   ");
    cmd.arg("check")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error [MAX_DATA_POINTS]"));
}

#[test]
fn test_bad_flag_is_a_usage_error_not_a_config_error() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.args(["--log-level", "LOUD", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error").not());
}

#[test]
fn test_missing_credentials_file_returns_exit_code_4() {
    let mut cmd = bare_cmd();
    cmd.env("FIREBASE_PROJECT_ID", "test-project")
        .env("FIREBASE_CREDENTIALS", "/nonexistent/asde/creds.json");
    cmd.arg("check")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("FIREBASE_CREDENTIALS"))
        .stderr(predicate::str::contains("/nonexistent/asde/creds.json"));
}

#[test]
fn test_zero_parallel_experiments_returns_exit_code_5() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("MAX_PARALLEL_EXPERIMENTS", "0");
    cmd.arg("check")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("MAX_PARALLEL_EXPERIMENTS"));
}

#[test]
fn test_short_timeout_returns_exit_code_5() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("SIMULATION_TIMEOUT_SECONDS", "29");
    cmd.arg("check")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("SIMULATION_TIMEOUT_SECONDS"));
}

#[test]
fn test_unknown_market_source_returns_exit_code_6() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("MARKET_DATA_SOURCE", "binance");
    cmd.arg("check")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("binance"))
        .stderr(predicate::str::contains("yfinance"));
}

#[test]
fn test_non_numeric_integer_returns_exit_code_7() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("MAX_DATA_POINTS", "lots");
    cmd.arg("check")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("MAX_DATA_POINTS"));
}

#[test]
fn test_unknown_log_level_returns_exit_code_7() {
    let (mut cmd, _creds) = asde_cmd();
    cmd.env("LOG_LEVEL", "LOUD");
    cmd.arg("check").assert().code(7);
}

#[test]
fn test_project_id_reported_before_credentials() {
    let mut cmd = bare_cmd();
    cmd.env("FIREBASE_CREDENTIALS", "/nonexistent/asde/creds.json");
    cmd.arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("FIREBASE_PROJECT_ID"));
}

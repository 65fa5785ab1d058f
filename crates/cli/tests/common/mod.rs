//! Shared test utilities for asde CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a credentials file so the default configuration validates.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `FIREBASE_PROJECT_ID` is set to "test-project" unless overridden.

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Every key the loader reads; cleared so host values never leak in.
const ASDE_KEYS: &[&str] = &[
    "LOG_LEVEL",
    "SYSTEM_ID",
    "FIREBASE_PROJECT_ID",
    "FIREBASE_CREDENTIALS",
    "MARKET_DATA_SOURCE",
    "MAX_DATA_POINTS",
    "CACHE_ENABLED",
    "MAX_PARALLEL_EXPERIMENTS",
    "SIMULATION_TIMEOUT_SECONDS",
    "ENABLE_CAUSAL_DISCOVERY",
    "ENABLE_LIVE_TRADING",
    "RUST_LOG",
];

/// Returns a hermetic `asde` command with no ASDE keys set.
pub fn bare_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("asde");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for key in ASDE_KEYS {
        cmd.env_remove(key);
    }

    cmd
}

/// Returns a hermetic `asde` command whose environment passes validation.
///
/// The returned temp file backs `FIREBASE_CREDENTIALS` and must outlive the command.
#[allow(dead_code)]
pub fn asde_cmd() -> (Command, NamedTempFile) {
    let creds = NamedTempFile::new().expect("create credentials file");
    let mut cmd = bare_cmd();
    cmd.env("FIREBASE_PROJECT_ID", "test-project")
        .env("FIREBASE_CREDENTIALS", creds.path());
    (cmd, creds)
}

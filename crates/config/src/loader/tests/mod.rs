//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test default application when keys are absent or empty.
//! - Test overrides from key-value sources and builder methods.
//! - Test the validation cascade and its first-failure-wins order.
//! - Test process environment and `.env` handling.
//!
//! Invariants:
//! - Most tests use in-memory sources and never touch process state.
//! - Tests that mutate the environment or cwd use `serial_test` and `env_lock()`.
//! - Temporary files are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::constants::{FIREBASE_CREDENTIALS_VAR, FIREBASE_PROJECT_ID_VAR};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build an in-memory source from key/value pairs.
pub fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A source holding only the settings required to pass validation, plus `extra`.
pub fn valid_source(credentials: &Path, extra: &[(&str, &str)]) -> HashMap<String, String> {
    let mut map = source(&[(FIREBASE_PROJECT_ID_VAR, "proj-1")]);
    map.insert(
        FIREBASE_CREDENTIALS_VAR.to_string(),
        credentials.display().to_string(),
    );
    map.extend(source(extra));
    map
}

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

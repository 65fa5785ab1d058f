//! Configuration management for the Autonomous Strategy Discovery Engine (ASDE).
//!
//! This crate loads process settings from environment variables (or an injected
//! key-value source), applies typed defaults, composes the credential and data
//! source blocks, and validates the whole tree before anything else starts.
//! A successfully built [`AsdeConfig`] is immutable and safe to share.

pub mod constants;
mod loader;
pub mod types;
pub mod validate;

pub use constants::{ENV_KEYS, EnvKeySpec};
pub use loader::{
    ConfigError, ConfigErrorKind, ConfigLoader, EnvSource, ProcessEnv, parse_bool, parse_int,
    parse_log_level,
};
pub use types::{AsdeConfig, DataConfig, FirebaseConfig, LogLevel};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}

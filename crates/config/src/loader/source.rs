//! Key-value sources the loader reads raw settings from.
//!
//! Responsibilities:
//! - Abstract "where raw strings come from" behind `EnvSource`.
//! - Provide the process environment and in-memory maps as sources.
//!
//! Invariants:
//! - Only an unset or empty value counts as absent. Values are passed on
//!   verbatim; surrounding whitespace is part of the value.
//! - A value that is present but unreadable is an error, never "absent".

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;
use std::hash::BuildHasher;
use std::path::PathBuf;

use super::error::ConfigError;

/// A source of raw configuration strings keyed by environment variable name.
pub trait EnvSource {
    /// Return the raw value stored under `key`, untouched.
    ///
    /// Fails with `ParseError` when a value exists but cannot be read as text.
    fn raw(&self, key: &str) -> Result<Option<String>, ConfigError>;

    /// Return the value under `key`, or `None` if it is unset or empty.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.raw(key)?.filter(|value| !value.is_empty()))
    }

    /// Return the value under `key` as a filesystem path, or `None` if it is
    /// unset or empty.
    fn path(&self, key: &str) -> Result<Option<PathBuf>, ConfigError> {
        Ok(self.get(key)?.map(PathBuf::from))
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn raw(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::ParseError {
                var: key.to_string(),
                message: "value is not valid UTF-8".to_string(),
            }),
        }
    }

    // Paths need not be UTF-8, so read the OS string directly.
    fn path(&self, key: &str) -> Result<Option<PathBuf>, ConfigError> {
        Ok(std::env::var_os(key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from))
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn raw(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(HashMap::get(self, key).cloned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn raw(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(BTreeMap::get(self, key).cloned())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn raw(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).raw(key)
    }

    fn path(&self, key: &str) -> Result<Option<PathBuf>, ConfigError> {
        (**self).path(key)
    }
}

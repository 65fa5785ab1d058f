//! Primitive validators for scalar configuration values.
//!
//! Responsibilities:
//! - Check one scalar constraint each (non-empty, positive, minimum, membership, existence).
//! - Produce a `ConfigError` naming the key and the violated constraint.
//!
//! Does NOT handle:
//! - Parsing raw strings (see `loader::env`).
//! - Ordering of checks across a configuration tree (see `types`).
//!
//! Invariants:
//! - Every function except `require_exists` is pure.
//! - `require_exists` performs a single filesystem existence check with no retry.

use std::path::Path;

use crate::loader::ConfigError;

/// Fails with `MissingRequiredValue` if `value` is empty.
pub fn require_non_empty(var: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingRequiredValue {
            var: var.to_string(),
        });
    }
    Ok(())
}

/// Fails with `OutOfRange` unless `value > 0`.
pub fn require_positive(var: &str, value: i64) -> Result<(), ConfigError> {
    if value <= 0 {
        return Err(ConfigError::OutOfRange {
            var: var.to_string(),
            message: format!("must be positive, got {value}"),
        });
    }
    Ok(())
}

/// Fails with `OutOfRange` unless `value >= min`.
pub fn require_at_least(var: &str, value: i64, min: i64) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::OutOfRange {
            var: var.to_string(),
            message: format!("must be at least {min}, got {value}"),
        });
    }
    Ok(())
}

/// Fails with `InvalidEnumValue` unless `value` is one of `allowed`.
pub fn require_one_of(
    var: &str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ConfigError> {
    if !allowed.contains(&value) {
        return Err(ConfigError::InvalidEnumValue {
            var: var.to_string(),
            value: value.to_string(),
            allowed: allowed.to_vec(),
        });
    }
    Ok(())
}

/// Fails with `ResourceNotFound` if nothing exists at `path`.
///
/// An existence check that errors out (as opposed to reporting absence) surfaces as
/// `ResourceUnreadable` immediately.
pub fn require_exists(var: &str, path: &Path) -> Result<(), ConfigError> {
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(ConfigError::ResourceNotFound {
            var: var.to_string(),
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ConfigError::ResourceUnreadable {
            var: var.to_string(),
            path: path.to_path_buf(),
            source,
        }),
    }
}

//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read raw strings for every ASDE key from an `EnvSource`.
//! - Coerce them to typed values and record them on a `ConfigLoader`.
//!
//! Does NOT handle:
//! - Defaults or range checks (see builder.rs and the `types` module).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Keys that are absent or empty leave the loader untouched, so defaults apply later.
//! - Values are coerced verbatim; padded numbers and names are invalid, not trimmed.
//! - A present but unparseable value is an error, never silently defaulted.
//! - Booleans are true only for the literal `true` (compared after lower-casing).

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::source::EnvSource;
use crate::constants::{
    CACHE_ENABLED_VAR, ENABLE_CAUSAL_DISCOVERY_VAR, ENABLE_LIVE_TRADING_VAR,
    FIREBASE_CREDENTIALS_VAR, FIREBASE_PROJECT_ID_VAR, LOG_LEVEL_VAR, MARKET_DATA_SOURCE_VAR,
    MAX_DATA_POINTS_VAR, MAX_PARALLEL_EXPERIMENTS_VAR, SIMULATION_TIMEOUT_SECONDS_VAR,
    SYSTEM_ID_VAR,
};
use crate::types::LogLevel;

/// Apply every recognised key found in `source` to the loader.
pub fn apply_env(loader: &mut ConfigLoader, source: &impl EnvSource) -> Result<(), ConfigError> {
    if let Some(level) = source.get(LOG_LEVEL_VAR)? {
        loader.set_log_level(Some(parse_log_level(LOG_LEVEL_VAR, &level)?));
    }
    if let Some(system_id) = source.get(SYSTEM_ID_VAR)? {
        loader.set_system_id(Some(system_id));
    }

    // Credentials
    if let Some(project_id) = source.get(FIREBASE_PROJECT_ID_VAR)? {
        loader.set_firebase_project_id(Some(project_id));
    }
    if let Some(path) = source.path(FIREBASE_CREDENTIALS_VAR)? {
        loader.set_firebase_credentials(Some(path));
    }

    // Data source
    if let Some(market_source) = source.get(MARKET_DATA_SOURCE_VAR)? {
        loader.set_market_data_source(Some(market_source));
    }
    if let Some(points) = source.get(MAX_DATA_POINTS_VAR)? {
        loader.set_max_data_points(Some(parse_int(MAX_DATA_POINTS_VAR, &points)?));
    }
    if let Some(enabled) = source.get(CACHE_ENABLED_VAR)? {
        loader.set_cache_enabled(Some(parse_bool(&enabled)));
    }

    // Performance tuning
    if let Some(parallel) = source.get(MAX_PARALLEL_EXPERIMENTS_VAR)? {
        loader.set_max_parallel_experiments(Some(parse_int(
            MAX_PARALLEL_EXPERIMENTS_VAR,
            &parallel,
        )?));
    }
    if let Some(timeout) = source.get(SIMULATION_TIMEOUT_SECONDS_VAR)? {
        loader.set_simulation_timeout_seconds(Some(parse_int(
            SIMULATION_TIMEOUT_SECONDS_VAR,
            &timeout,
        )?));
    }

    // Feature toggles
    if let Some(enabled) = source.get(ENABLE_CAUSAL_DISCOVERY_VAR)? {
        loader.set_enable_causal_discovery(Some(parse_bool(&enabled)));
    }
    if let Some(enabled) = source.get(ENABLE_LIVE_TRADING_VAR)? {
        loader.set_enable_live_trading(Some(parse_bool(&enabled)));
    }

    Ok(())
}

/// `true` only for the literal `true`, case-insensitively. Everything else,
/// including `1` and `yes`, is `false`.
pub fn parse_bool(raw: &str) -> bool {
    raw.to_lowercase() == "true"
}

/// Parse a base-10 signed integer.
pub fn parse_int(var: &str, raw: &str) -> Result<i64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::ParseError {
        var: var.to_string(),
        message: format!("must be a base-10 integer, got '{raw}'"),
    })
}

/// Look up a log level by name against the fixed set.
pub fn parse_log_level(var: &str, raw: &str) -> Result<LogLevel, ConfigError> {
    LogLevel::from_name(raw).ok_or_else(|| ConfigError::ParseError {
        var: var.to_string(),
        message: format!(
            "unknown log level '{raw}'. Must be one of {:?}",
            LogLevel::NAMES
        ),
    })
}

//! Centralized constants for the ASDE configuration subsystem.
//!
//! This module contains every environment key name, default value, and
//! validation bound so that no other module carries magic values.

use serde::Serialize;

// =============================================================================
// Environment Keys
// =============================================================================

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const SYSTEM_ID_VAR: &str = "SYSTEM_ID";
pub const FIREBASE_PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";
pub const FIREBASE_CREDENTIALS_VAR: &str = "FIREBASE_CREDENTIALS";
pub const MARKET_DATA_SOURCE_VAR: &str = "MARKET_DATA_SOURCE";
pub const MAX_DATA_POINTS_VAR: &str = "MAX_DATA_POINTS";
pub const CACHE_ENABLED_VAR: &str = "CACHE_ENABLED";
pub const MAX_PARALLEL_EXPERIMENTS_VAR: &str = "MAX_PARALLEL_EXPERIMENTS";
pub const SIMULATION_TIMEOUT_SECONDS_VAR: &str = "SIMULATION_TIMEOUT_SECONDS";
pub const ENABLE_CAUSAL_DISCOVERY_VAR: &str = "ENABLE_CAUSAL_DISCOVERY";
pub const ENABLE_LIVE_TRADING_VAR: &str = "ENABLE_LIVE_TRADING";

/// Gate checked before a `.env` file is loaded.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Core System Defaults
// =============================================================================

/// Default system identifier.
pub const DEFAULT_SYSTEM_ID: &str = "asde-prod-001";

/// Default path of the Firebase service-account credentials file.
pub const DEFAULT_FIREBASE_CREDENTIALS: &str = "firebase-credentials.json";

// =============================================================================
// Data Source Defaults
// =============================================================================

/// Default market data source.
pub const DEFAULT_MARKET_DATA_SOURCE: &str = "ccxt";

/// Market data sources the system knows how to talk to.
pub const ALLOWED_MARKET_DATA_SOURCES: &[&str] = &["ccxt", "yfinance", "alpaca"];

/// Default upper bound on data points held in memory.
pub const DEFAULT_MAX_DATA_POINTS: i64 = 100_000;

/// Default for the data cache toggle.
pub const DEFAULT_CACHE_ENABLED: bool = true;

// =============================================================================
// Performance Tuning Defaults & Bounds
// =============================================================================

/// Default number of experiments allowed to run concurrently.
pub const DEFAULT_MAX_PARALLEL_EXPERIMENTS: i64 = 4;

/// Default per-simulation timeout in seconds.
pub const DEFAULT_SIMULATION_TIMEOUT_SECS: i64 = 300;

/// Minimum per-simulation timeout in seconds (inclusive).
pub const MIN_SIMULATION_TIMEOUT_SECS: i64 = 30;

// =============================================================================
// Feature Toggle Defaults
// =============================================================================

pub const DEFAULT_ENABLE_CAUSAL_DISCOVERY: bool = true;
pub const DEFAULT_ENABLE_LIVE_TRADING: bool = false;

// =============================================================================
// Key Catalogue
// =============================================================================

/// Describes one recognised environment key for operator-facing listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvKeySpec {
    /// Environment variable name.
    pub name: &'static str,
    /// Value type as shown to operators.
    pub kind: &'static str,
    /// Default applied when the key is absent or empty.
    pub default: &'static str,
    /// Constraint enforced at startup.
    pub constraint: &'static str,
}

/// Every environment key the loader reads, in loading order.
pub const ENV_KEYS: &[EnvKeySpec] = &[
    EnvKeySpec {
        name: LOG_LEVEL_VAR,
        kind: "enum",
        default: "INFO",
        constraint: "one of DEBUG/INFO/WARNING/ERROR/CRITICAL",
    },
    EnvKeySpec {
        name: SYSTEM_ID_VAR,
        kind: "string",
        default: DEFAULT_SYSTEM_ID,
        constraint: "none",
    },
    EnvKeySpec {
        name: FIREBASE_PROJECT_ID_VAR,
        kind: "string",
        default: "",
        constraint: "required, non-empty",
    },
    EnvKeySpec {
        name: FIREBASE_CREDENTIALS_VAR,
        kind: "path",
        default: DEFAULT_FIREBASE_CREDENTIALS,
        constraint: "file must exist",
    },
    EnvKeySpec {
        name: MARKET_DATA_SOURCE_VAR,
        kind: "enum",
        default: DEFAULT_MARKET_DATA_SOURCE,
        constraint: "one of ccxt/yfinance/alpaca",
    },
    EnvKeySpec {
        name: MAX_DATA_POINTS_VAR,
        kind: "integer",
        default: "100000",
        constraint: "> 0",
    },
    EnvKeySpec {
        name: CACHE_ENABLED_VAR,
        kind: "boolean",
        default: "true",
        constraint: "true only for the literal \"true\"",
    },
    EnvKeySpec {
        name: MAX_PARALLEL_EXPERIMENTS_VAR,
        kind: "integer",
        default: "4",
        constraint: "> 0",
    },
    EnvKeySpec {
        name: SIMULATION_TIMEOUT_SECONDS_VAR,
        kind: "integer",
        default: "300",
        constraint: ">= 30",
    },
    EnvKeySpec {
        name: ENABLE_CAUSAL_DISCOVERY_VAR,
        kind: "boolean",
        default: "true",
        constraint: "true only for the literal \"true\"",
    },
    EnvKeySpec {
        name: ENABLE_LIVE_TRADING_VAR,
        kind: "boolean",
        default: "false",
        constraint: "true only for the literal \"true\"",
    },
];

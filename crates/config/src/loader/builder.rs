//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that collects raw settings from a
//!   key-value source and explicit overrides.
//! - Apply documented defaults and construct the validated `AsdeConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Individual constraint checks (delegated to the `types` blocks).
//!
//! Invariants / Assumptions:
//! - Later calls win: callers apply `with_*` overrides after `from_env()` so that
//!   explicit overrides take precedence over environment variables.
//! - Defaults apply only to keys that were never set.
//! - `build()` constructs the credential block, then the data block, then the
//!   root, so the first failure follows the validation cascade order.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::source::{EnvSource, ProcessEnv};
use crate::constants::{
    CACHE_ENABLED_VAR, DEFAULT_CACHE_ENABLED, DEFAULT_ENABLE_CAUSAL_DISCOVERY,
    DEFAULT_ENABLE_LIVE_TRADING, DEFAULT_FIREBASE_CREDENTIALS, DEFAULT_MARKET_DATA_SOURCE,
    DEFAULT_MAX_DATA_POINTS, DEFAULT_MAX_PARALLEL_EXPERIMENTS, DEFAULT_SIMULATION_TIMEOUT_SECS,
    DEFAULT_SYSTEM_ID, DOTENV_DISABLED_VAR, ENABLE_CAUSAL_DISCOVERY_VAR, ENABLE_LIVE_TRADING_VAR,
    FIREBASE_CREDENTIALS_VAR, LOG_LEVEL_VAR, MARKET_DATA_SOURCE_VAR, MAX_DATA_POINTS_VAR,
    MAX_PARALLEL_EXPERIMENTS_VAR, SIMULATION_TIMEOUT_SECONDS_VAR, SYSTEM_ID_VAR,
};
use crate::types::{AsdeConfig, DataConfig, FirebaseConfig, LogLevel};

/// Configuration loader that builds config from a key-value source and overrides.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    log_level: Option<LogLevel>,
    system_id: Option<String>,
    firebase_project_id: Option<String>,
    firebase_credentials: Option<PathBuf>,
    market_data_source: Option<String>,
    max_data_points: Option<i64>,
    cache_enabled: Option<bool>,
    max_parallel_experiments: Option<i64>,
    simulation_timeout_seconds: Option<i64>,
    enable_causal_discovery: Option<bool>,
    enable_live_trading: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the process environment and build the configuration in one step.
    pub fn load_from_env() -> Result<AsdeConfig, ConfigError> {
        Self::new().from_env()?.build()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from the process environment.
    pub fn from_env(self) -> Result<Self, ConfigError> {
        self.from_source(&ProcessEnv)
    }

    /// Read configuration from an arbitrary key-value source.
    ///
    /// Values already set on the loader are overwritten by keys present in `source`.
    pub fn from_source(mut self, source: &impl EnvSource) -> Result<Self, ConfigError> {
        apply_env(&mut self, source)?;
        Ok(self)
    }

    /// Set the log verbosity level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the system identifier.
    pub fn with_system_id(mut self, system_id: String) -> Self {
        self.system_id = Some(system_id);
        self
    }

    /// Set the Firebase project id.
    pub fn with_firebase_project_id(mut self, project_id: String) -> Self {
        self.firebase_project_id = Some(project_id);
        self
    }

    /// Set the path to the Firebase credentials file.
    pub fn with_firebase_credentials(mut self, path: PathBuf) -> Self {
        self.firebase_credentials = Some(path);
        self
    }

    /// Set the market data source name.
    pub fn with_market_data_source(mut self, source: String) -> Self {
        self.market_data_source = Some(source);
        self
    }

    /// Set the maximum number of data points held in memory.
    pub fn with_max_data_points(mut self, points: i64) -> Self {
        self.max_data_points = Some(points);
        self
    }

    /// Set whether the data cache is enabled.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = Some(enabled);
        self
    }

    /// Set the maximum number of experiments run in parallel.
    pub fn with_max_parallel_experiments(mut self, parallel: i64) -> Self {
        self.max_parallel_experiments = Some(parallel);
        self
    }

    /// Set the per-simulation timeout in seconds.
    pub fn with_simulation_timeout_seconds(mut self, seconds: i64) -> Self {
        self.simulation_timeout_seconds = Some(seconds);
        self
    }

    /// Set whether causal discovery is enabled.
    pub fn with_enable_causal_discovery(mut self, enabled: bool) -> Self {
        self.enable_causal_discovery = Some(enabled);
        self
    }

    /// Set whether live trading is enabled.
    pub fn with_enable_live_trading(mut self, enabled: bool) -> Self {
        self.enable_live_trading = Some(enabled);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violation of the validation cascade: credentials,
    /// data source, parallel experiments, simulation timeout.
    pub fn build(self) -> Result<AsdeConfig, ConfigError> {
        let firebase = FirebaseConfig::new(
            self.firebase_project_id.unwrap_or_default(),
            or_default(
                self.firebase_credentials,
                FIREBASE_CREDENTIALS_VAR,
                || PathBuf::from(DEFAULT_FIREBASE_CREDENTIALS),
            ),
        )?;

        let data = DataConfig::new(
            or_default(self.market_data_source, MARKET_DATA_SOURCE_VAR, || {
                DEFAULT_MARKET_DATA_SOURCE.to_string()
            }),
            or_default(self.max_data_points, MAX_DATA_POINTS_VAR, || {
                DEFAULT_MAX_DATA_POINTS
            }),
            or_default(self.cache_enabled, CACHE_ENABLED_VAR, || {
                DEFAULT_CACHE_ENABLED
            }),
        )?;

        let config = AsdeConfig::new(
            or_default(self.log_level, LOG_LEVEL_VAR, LogLevel::default),
            or_default(self.system_id, SYSTEM_ID_VAR, || {
                DEFAULT_SYSTEM_ID.to_string()
            }),
            firebase,
            data,
            or_default(
                self.max_parallel_experiments,
                MAX_PARALLEL_EXPERIMENTS_VAR,
                || DEFAULT_MAX_PARALLEL_EXPERIMENTS,
            ),
            or_default(
                self.simulation_timeout_seconds,
                SIMULATION_TIMEOUT_SECONDS_VAR,
                || DEFAULT_SIMULATION_TIMEOUT_SECS,
            ),
            or_default(
                self.enable_causal_discovery,
                ENABLE_CAUSAL_DISCOVERY_VAR,
                || DEFAULT_ENABLE_CAUSAL_DISCOVERY,
            ),
            or_default(self.enable_live_trading, ENABLE_LIVE_TRADING_VAR, || {
                DEFAULT_ENABLE_LIVE_TRADING
            }),
        )?;

        tracing::info!(
            system_id = config.system_id(),
            log_level = %config.log_level(),
            market_data_source = config.data().market_data_source(),
            max_parallel_experiments = config.max_parallel_experiments(),
            enable_live_trading = config.enable_live_trading(),
            "Configuration validated"
        );
        if config.enable_live_trading() {
            tracing::warn!(system_id = config.system_id(), "Live trading is enabled");
        }

        Ok(config)
    }

    /// Get the log level if set via environment variable or builder.
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_level
    }

    // Internal setters for use by other loader modules

    pub(crate) fn set_log_level(&mut self, level: Option<LogLevel>) {
        self.log_level = level;
    }

    pub(crate) fn set_system_id(&mut self, system_id: Option<String>) {
        self.system_id = system_id;
    }

    pub(crate) fn set_firebase_project_id(&mut self, project_id: Option<String>) {
        self.firebase_project_id = project_id;
    }

    pub(crate) fn set_firebase_credentials(&mut self, path: Option<PathBuf>) {
        self.firebase_credentials = path;
    }

    pub(crate) fn set_market_data_source(&mut self, source: Option<String>) {
        self.market_data_source = source;
    }

    pub(crate) fn set_max_data_points(&mut self, points: Option<i64>) {
        self.max_data_points = points;
    }

    pub(crate) fn set_cache_enabled(&mut self, enabled: Option<bool>) {
        self.cache_enabled = enabled;
    }

    pub(crate) fn set_max_parallel_experiments(&mut self, parallel: Option<i64>) {
        self.max_parallel_experiments = parallel;
    }

    pub(crate) fn set_simulation_timeout_seconds(&mut self, seconds: Option<i64>) {
        self.simulation_timeout_seconds = seconds;
    }

    pub(crate) fn set_enable_causal_discovery(&mut self, enabled: Option<bool>) {
        self.enable_causal_discovery = enabled;
    }

    pub(crate) fn set_enable_live_trading(&mut self, enabled: Option<bool>) {
        self.enable_live_trading = enabled;
    }
}

/// Resolve a value that may be unset, logging when the default is used.
fn or_default<T>(value: Option<T>, var: &str, default: impl FnOnce() -> T) -> T {
    value.unwrap_or_else(|| {
        tracing::debug!(var, "Using default value");
        default()
    })
}

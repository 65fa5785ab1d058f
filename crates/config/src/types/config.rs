//! Root configuration for ASDE.
//!
//! Responsibilities:
//! - Own the credential and data source blocks plus the top-level scalars.
//! - Run the validation cascade and expose read-only accessors to collaborators.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader`).
//!
//! Invariants:
//! - Cascade order is fixed: credentials, data source, parallel experiments,
//!   simulation timeout. The first failure wins.
//! - Fields are private; once built, a config cannot be mutated.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::constants::{
    MAX_PARALLEL_EXPERIMENTS_VAR, MIN_SIMULATION_TIMEOUT_SECS, SIMULATION_TIMEOUT_SECONDS_VAR,
};
use crate::loader::ConfigError;
use crate::types::{DataConfig, FirebaseConfig, LogLevel};
use crate::validate::{require_at_least, require_positive};

/// Main configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsdeConfig {
    log_level: LogLevel,
    system_id: String,
    firebase: FirebaseConfig,
    data: DataConfig,
    max_parallel_experiments: i64,
    simulation_timeout_seconds: i64,
    enable_causal_discovery: bool,
    enable_live_trading: bool,
}

impl AsdeConfig {
    /// Assemble a root config from already-validated blocks.
    ///
    /// The blocks ran their own checks when they were built, so only the
    /// top-level scalars are checked here.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        log_level: LogLevel,
        system_id: String,
        firebase: FirebaseConfig,
        data: DataConfig,
        max_parallel_experiments: i64,
        simulation_timeout_seconds: i64,
        enable_causal_discovery: bool,
        enable_live_trading: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            log_level,
            system_id,
            firebase,
            data,
            max_parallel_experiments,
            simulation_timeout_seconds,
            enable_causal_discovery,
            enable_live_trading,
        };
        config.validate_limits()?;
        Ok(config)
    }

    /// Run the full validation cascade again.
    ///
    /// Construction already did this once; this is for callers that want to
    /// re-check filesystem state (the credentials file) later on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.firebase.validate()?;
        self.data.validate()?;
        self.validate_limits()
    }

    fn validate_limits(&self) -> Result<(), ConfigError> {
        require_positive(MAX_PARALLEL_EXPERIMENTS_VAR, self.max_parallel_experiments)?;
        require_at_least(
            SIMULATION_TIMEOUT_SECONDS_VAR,
            self.simulation_timeout_seconds,
            MIN_SIMULATION_TIMEOUT_SECS,
        )
    }

    /// Wrap the config for sharing across threads and tasks.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn system_id(&self) -> &str {
        &self.system_id
    }

    pub fn firebase(&self) -> &FirebaseConfig {
        &self.firebase
    }

    pub fn data(&self) -> &DataConfig {
        &self.data
    }

    /// Maximum number of experiments run concurrently. Always at least 1.
    pub fn max_parallel_experiments(&self) -> u64 {
        self.max_parallel_experiments.unsigned_abs()
    }

    pub fn simulation_timeout_seconds(&self) -> u64 {
        self.simulation_timeout_seconds.unsigned_abs()
    }

    /// Per-simulation timeout. Always at least 30 seconds.
    pub fn simulation_timeout(&self) -> Duration {
        Duration::from_secs(self.simulation_timeout_seconds())
    }

    pub fn enable_causal_discovery(&self) -> bool {
        self.enable_causal_discovery
    }

    pub fn enable_live_trading(&self) -> bool {
        self.enable_live_trading
    }
}

//! Data source block.
//!
//! Responsibilities:
//! - Name the market data source and bound the number of data points held in memory.
//! - Carry the data cache toggle.
//!
//! Invariants:
//! - A `DataConfig` value only exists if validation passed.
//! - Validation order: `max_data_points` first, then the source name.

use serde::Serialize;

use crate::constants::{
    ALLOWED_MARKET_DATA_SOURCES, DEFAULT_CACHE_ENABLED, DEFAULT_MARKET_DATA_SOURCE,
    DEFAULT_MAX_DATA_POINTS, MARKET_DATA_SOURCE_VAR, MAX_DATA_POINTS_VAR,
};
use crate::loader::ConfigError;
use crate::validate::{require_one_of, require_positive};

/// Data source and preprocessing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataConfig {
    market_data_source: String,
    max_data_points: i64,
    cache_enabled: bool,
}

impl DataConfig {
    /// Build and validate a data source block.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `max_data_points <= 0`.
    /// - `InvalidEnumValue` if the source is not one of `ccxt`, `yfinance`, `alpaca`.
    pub fn new(
        market_data_source: impl Into<String>,
        max_data_points: i64,
        cache_enabled: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            market_data_source: market_data_source.into(),
            max_data_points,
            cache_enabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the block's constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(MAX_DATA_POINTS_VAR, self.max_data_points)?;
        require_one_of(
            MARKET_DATA_SOURCE_VAR,
            &self.market_data_source,
            ALLOWED_MARKET_DATA_SOURCES,
        )
    }

    pub fn market_data_source(&self) -> &str {
        &self.market_data_source
    }

    /// Upper bound on data points held in memory. Always at least 1.
    pub fn max_data_points(&self) -> u64 {
        self.max_data_points.unsigned_abs()
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            market_data_source: DEFAULT_MARKET_DATA_SOURCE.to_string(),
            max_data_points: DEFAULT_MAX_DATA_POINTS,
            cache_enabled: DEFAULT_CACHE_ENABLED,
        }
    }
}

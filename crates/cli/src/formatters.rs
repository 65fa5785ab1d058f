//! Output formatters for CLI commands.
//!
//! Provides JSON and tab-separated table output for the resolved
//! configuration and the environment key catalogue.

use anyhow::Result;
use asde_config::{AsdeConfig, EnvKeySpec};

use crate::args::OutputFormat;

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the resolved configuration.
    fn format_config(&self, config: &AsdeConfig) -> Result<String>;

    /// Format the environment key catalogue.
    fn format_env_keys(&self, keys: &[EnvKeySpec]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_config(&self, config: &AsdeConfig) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }

    fn format_env_keys(&self, keys: &[EnvKeySpec]) -> Result<String> {
        Ok(serde_json::to_string_pretty(keys)?)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_config(&self, config: &AsdeConfig) -> Result<String> {
        let rows: Vec<Vec<String>> = config_rows(config)
            .into_iter()
            .map(|(key, value)| vec![key.to_string(), value])
            .collect();
        Ok(render_table(&["KEY", "VALUE"], &rows))
    }

    fn format_env_keys(&self, keys: &[EnvKeySpec]) -> Result<String> {
        let rows: Vec<Vec<String>> = keys
            .iter()
            .map(|k| {
                vec![
                    k.name.to_string(),
                    k.kind.to_string(),
                    k.default.to_string(),
                    k.constraint.to_string(),
                ]
            })
            .collect();
        Ok(render_table(&["KEY", "TYPE", "DEFAULT", "CONSTRAINT"], &rows))
    }
}

/// Resolved value of every environment key, in catalogue order.
pub fn config_rows(config: &AsdeConfig) -> Vec<(&'static str, String)> {
    vec![
        ("LOG_LEVEL", config.log_level().to_string()),
        ("SYSTEM_ID", config.system_id().to_string()),
        (
            "FIREBASE_PROJECT_ID",
            config.firebase().project_id().to_string(),
        ),
        (
            "FIREBASE_CREDENTIALS",
            config.firebase().credentials_path().display().to_string(),
        ),
        (
            "MARKET_DATA_SOURCE",
            config.data().market_data_source().to_string(),
        ),
        (
            "MAX_DATA_POINTS",
            config.data().max_data_points().to_string(),
        ),
        ("CACHE_ENABLED", config.data().cache_enabled().to_string()),
        (
            "MAX_PARALLEL_EXPERIMENTS",
            config.max_parallel_experiments().to_string(),
        ),
        (
            "SIMULATION_TIMEOUT_SECONDS",
            config.simulation_timeout_seconds().to_string(),
        ),
        (
            "ENABLE_CAUSAL_DISCOVERY",
            config.enable_causal_discovery().to_string(),
        ),
        (
            "ENABLE_LIVE_TRADING",
            config.enable_live_trading().to_string(),
        ),
    ]
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut output = String::new();
    output.push_str(&headers.join("\t"));
    output.push('\n');
    for row in rows {
        output.push_str(&row.join("\t"));
        output.push('\n');
    }
    output
}

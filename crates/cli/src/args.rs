//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse global configuration overrides and subcommands.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read ASDE environment keys; the config loader does that so that
//!   every key goes through the same coercion rules.

use asde_config::{ConfigError, LogLevel, parse_log_level};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asde")]
#[command(about = "ASDE - validate and inspect engine configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  asde check\n  asde show --format json\n  asde env\n  FIREBASE_PROJECT_ID=proj-1 asde --credentials ./creds.json check\n"
)]
pub struct Cli {
    /// Override SYSTEM_ID
    #[arg(long, global = true, value_name = "ID")]
    pub system_id: Option<String>,

    /// Override FIREBASE_CREDENTIALS
    #[arg(long, global = true, value_name = "FILE")]
    pub credentials: Option<PathBuf>,

    /// Override LOG_LEVEL (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long, global = true, value_parser = parse_log_level_flag)]
    pub log_level: Option<LogLevel>,

    /// Log output format (written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the configuration, then exit
    Check,

    /// Print the resolved configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List recognised environment keys with defaults and constraints
    Env {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

impl Commands {
    /// Whether this command needs a validated configuration to run.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Env { .. })
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Supported log formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

fn parse_log_level_flag(raw: &str) -> Result<LogLevel, ConfigError> {
    parse_log_level("--log-level", raw)
}

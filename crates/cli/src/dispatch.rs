//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Commands that report `needs_config()` always receive a validated configuration.

use anyhow::{Result, anyhow};
use asde_config::AsdeConfig;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, config: Option<&AsdeConfig>) -> Result<()> {
    match cli.command {
        Commands::Check => commands::check::run(require_config(config)?)?,
        Commands::Show { format } => commands::show::run(require_config(config)?, format)?,
        Commands::Env { format } => commands::env::run(format)?,
    }
    Ok(())
}

fn require_config(config: Option<&AsdeConfig>) -> Result<&AsdeConfig> {
    config.ok_or_else(|| anyhow!("command requires a loaded configuration"))
}

//! ASDE CLI - validate and inspect the engine's environment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and apply them as configuration overrides.
//! - Load and validate the environment configuration once at startup.
//! - Initialize structured logging at the configured level.
//!
//! Does NOT handle:
//! - Individual key parsing or constraint checks (see `asde_config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible.
//! - A configuration failure terminates the process with the exit code of its kind
//!   and a message naming the offending key.
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::{Cli, LogFormat};
use asde_config::{ConfigError, ConfigLoader, LogLevel};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so overrides and env reads see the same values
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(l) => l,
        Err(e) => fail_config(&e),
    };

    let cli = Cli::parse();

    let mut loader = match loader.from_env() {
        Ok(l) => l,
        Err(e) => fail_config(&e),
    };

    // Apply CLI overrides (highest priority)
    if let Some(ref system_id) = cli.system_id {
        loader = loader.with_system_id(system_id.clone());
    }
    if let Some(ref path) = cli.credentials {
        loader = loader.with_firebase_credentials(path.clone());
    }
    if let Some(level) = cli.log_level {
        loader = loader.with_log_level(level);
    }

    init_logging(loader.log_level().unwrap_or_default(), cli.log_format);

    let config = if cli.command.needs_config() {
        match loader.build() {
            Ok(c) => Some(c),
            Err(e) => fail_config(&e),
        }
    } else {
        None
    };

    if let Err(e) = run_command(cli, config.as_ref()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

/// Install the global subscriber. `RUST_LOG` still wins when set.
fn init_logging(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.to_level_filter().into())
        .from_env_lossy();

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn fail_config(err: &ConfigError) -> ! {
    eprintln!(
        "Configuration error [{}]: {}",
        err.var().unwrap_or("environment"),
        err
    );
    std::process::exit(ExitCode::from(err).as_i32());
}

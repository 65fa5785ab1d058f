//! Env command implementation.

use anyhow::Result;
use asde_config::ENV_KEYS;

use crate::args::OutputFormat;
use crate::formatters::get_formatter;

pub fn run(format: OutputFormat) -> Result<()> {
    let output = get_formatter(format).format_env_keys(ENV_KEYS)?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

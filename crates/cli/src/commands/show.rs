//! Show command implementation.

use anyhow::Result;
use asde_config::AsdeConfig;

use crate::args::OutputFormat;
use crate::formatters::get_formatter;

pub fn run(config: &AsdeConfig, format: OutputFormat) -> Result<()> {
    let output = get_formatter(format).format_config(config)?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

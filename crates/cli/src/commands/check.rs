//! Check command implementation.

use anyhow::Result;
use asde_config::AsdeConfig;
use tracing::info;

/// A built `AsdeConfig` has already passed every check, so this only reports.
pub fn run(config: &AsdeConfig) -> Result<()> {
    info!(system_id = %config.system_id(), "Configuration check passed");
    println!("configuration OK ({})", config.system_id());
    Ok(())
}

//! Handler for the `config` command group.

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `config validate`.
///
/// # Errors
/// Returns the load or validation error for the file.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    println!("Configuration is valid: {}", path.display());
    println!("  database: {}", config.database);
    println!("  listen:   {}", config.server.socket_addr());
    println!("  logging:  {} ({})", config.logging.level, config.logging.format);
    Ok(())
}

//! Handlers for the `serve` and `migrate` commands.

use tracing::info;

use crate::adapter::inbound::cli::command::{MigrateArgs, ServeArgs};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Resolve the effective configuration for `serve`.
///
/// Command-line flags win over the config file and environment.
///
/// # Errors
/// Returns an error if the config file cannot be loaded or the result is
/// invalid.
pub fn serve_config(args: &ServeArgs) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = &args.database {
        config.database.clone_from(database);
    }
    config.validate()?;
    Ok(config)
}

/// Execute the serve command.
///
/// # Errors
/// Returns any configuration, store or listener error.
pub async fn execute_serve(args: &ServeArgs) -> Result<()> {
    let config = serve_config(args)?;
    config.init_logging();
    info!("registrar starting");
    bootstrap::serve(config).await
}

/// Execute the migrate command.
///
/// # Errors
/// Returns any configuration or migration error.
pub fn execute_migrate(args: &MigrateArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(database) = &args.database {
        config.database.clone_from(database);
    }
    config.validate()?;
    config.init_logging();

    bootstrap::open_store(&config.database)?;
    info!(database = %config.database, "Schema is up to date");
    Ok(())
}

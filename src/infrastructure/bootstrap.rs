//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! This is the composition root: it opens the store, builds the record
//! service and router, and runs the listener.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::http::router::router;
use crate::adapter::outbound::sqlite::database::connection::{
    create_pool, is_in_memory, run_migrations,
};
use crate::adapter::outbound::sqlite::store::SqliteRecordStore;
use crate::application::records::RecordService;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Open the SQLite store at `database` and make sure the schema exists.
///
/// # Errors
/// Returns an error if the pool cannot be created or migrations fail.
pub fn open_store(database: &str) -> Result<SqliteRecordStore> {
    if is_in_memory(database) {
        warn!("Using an in-memory database; records are lost on exit");
    }
    let pool = create_pool(database)?;
    run_migrations(&pool)?;
    Ok(SqliteRecordStore::new(pool))
}

/// Build the application router over the configured store.
///
/// # Errors
/// Returns an error if the store cannot be opened.
pub fn build_app(config: &Config) -> Result<Router> {
    let store = open_store(&config.database)?;
    Ok(router(RecordService::new(store)))
}

/// Serve HTTP until Ctrl-C.
///
/// # Errors
/// Returns an error if the address is invalid, the store cannot be opened,
/// or the listener fails.
pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr =
        config
            .server
            .socket_addr()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "host",
                reason: e.to_string(),
            })?;

    let app = build_app(&config)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, database = %config.database, "registrar listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("registrar stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

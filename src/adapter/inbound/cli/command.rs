//! Command-line interface definitions.
//!
//! Defines the CLI structure for the registrar binary using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Course, student and enrollment records over HTTP
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the registrar CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API (foreground)
    Serve(ServeArgs),

    /// Create the database schema and exit
    Migrate(MigrateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `registrar config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Check a configuration file for errors.
    Validate(ConfigPathArg),
}

/// Arguments for `registrar serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding the config file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database path, overriding the config file
    #[arg(long)]
    pub database: Option<String>,
}

/// Arguments for `registrar migrate`.
#[derive(Args, Debug, Default)]
pub struct MigrateArgs {
    /// Configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SQLite database path, overriding the config file
    #[arg(long)]
    pub database: Option<String>,
}

/// A required configuration file path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Configuration file to check
    #[arg(short, long)]
    pub config: PathBuf,
}

use clap::Parser;
use registrar::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use registrar::adapter::inbound::cli::{config, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => run::execute_serve(&args).await,
        Commands::Migrate(args) => run::execute_migrate(&args),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

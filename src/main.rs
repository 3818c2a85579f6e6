//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use swc_data::{
    cli::{Commands, SwcCli},
    commands::{handle_counts, handle_get, handle_init},
    logging::init_cli_logger,
    storage::Database,
    DatabaseConfig,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = SwcCli::parse();
    init_cli_logger(app.verbose);

    let config = DatabaseConfig::resolve(app.db)?;
    let mut stdout = std::io::stdout().lock();

    match app.command {
        Commands::Init => {
            handle_init(&config, &mut stdout)?;
        }

        Commands::Counts { json } => {
            let db = Database::open(&config.read_only(true))?;
            handle_counts(&db, json, &mut stdout)?;
        }

        Commands::Get { cmd } => {
            let db = Database::open(&config.read_only(true))?;
            handle_get(&db, cmd, &mut stdout)?;
        }
    }

    Ok(())
}

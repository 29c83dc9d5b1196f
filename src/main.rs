//! Portal SDK Watchtower
//!
//! Polls the Portal SDK version feed, keeps the last seen release in a lock
//! file, and announces new versions or download size changes on Discord.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod feed;
mod humanize;
mod logging;
mod notify;
mod watcher;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::Settings;
use error::Result;

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Watch) {
        Commands::Watch => commands::watch::run(Settings::from_args(&cli.lock_file, &cli.watch)?).await,
        Commands::Check => commands::check::run(Settings::from_args(&cli.lock_file, &cli.watch)?).await,
        Commands::Show => commands::show::run(&cli.lock_file),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

#[tokio::main]
async fn main() {
    // Loaded before parsing so `.env` values reach clap's `env` fallbacks
    let env_file = dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Some(path) = env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    if let Err(e) = dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

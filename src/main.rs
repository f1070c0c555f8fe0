//! Patent filing data CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use patents_config::{load_config, AppConfig};
use patents_monitor::setup_logging;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = read_config(&cli.config)?;

    // Setup logging
    let json = cli.json_logs || config.logging.is_json();
    let level = cli.log_level_or(&config.logging.level);
    let _guard = setup_logging(level, json, config.logging.file.as_deref());

    // Execute command
    match cli.command {
        Commands::Parse(args) => cli::commands::parse::run(args).await,
        Commands::Signals(args) => cli::commands::signals::run(args, &config).await,
        Commands::Universe(args) => cli::commands::universe::run(args, &config).await,
        Commands::Strategies => cli::commands::strategies::run().await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}

/// Load the configuration file, falling back to defaults when it is absent.
fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_config(path).with_context(|| format!("Failed to load configuration {:?}", path))
}

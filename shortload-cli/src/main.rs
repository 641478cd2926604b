use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use shortload_config::{ConfigLoader, LoggingConfig, ShortloadConfig};
use std::path::PathBuf;
use tracing::{debug, info};

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::{config, plan, run, smoke, tasks};

/// Load configuration from file or environment
pub(crate) fn load_config(config_path: Option<&PathBuf>) -> Result<ShortloadConfig> {
    let loader = ConfigLoader::new();

    match config_path {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            loader
                .from_file(path)
                .context(format!("Failed to load configuration from {:?}", path))
        }
        None => {
            debug!("No configuration file specified. Loading from environment or defaults.");
            loader
                .from_env()
                .context("Failed to load configuration from environment")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        // Config commands must work even when the configured file is broken
        Commands::Config { config_cmd } => {
            logging::init_logging(&LoggingConfig::default(), cli.log_level.as_ref())?;
            config::handle_config_command(config_cmd, cli.config.as_ref())
        }
        Commands::Run(args) => run::handle_run(start(&cli)?, args).await,
        Commands::Plan { seed, count } => {
            let config = start(&cli)?;
            plan::handle_plan(&config, *seed, *count, &mut std::io::stdout().lock())
        }
        Commands::Smoke { host } => smoke::handle_smoke(&start(&cli)?, host.as_ref()).await,
        Commands::Tasks => tasks::handle_tasks(&start(&cli)?, &mut std::io::stdout().lock()),
    }
}

/// Load configuration and initialize logging from it
fn start(cli: &Cli) -> Result<ShortloadConfig> {
    let config = load_config(cli.config.as_ref())?;
    logging::init_logging(&config.logging, cli.log_level.as_ref())?;
    info!("shortload starting");
    Ok(config)
}

//! # `tola` Entry Point
//!
//! Parses arguments, sets up logging and configuration, and dispatches to
//! a command. The actual work lives in the `tola_cli` library.

use anyhow::{Context, Result};
use clap::Parser;

use tola_cli::cli::{Cli, Commands, ConfigCommands};
use tola_cli::commands;
use tola_cli::config::AppConfig;
use tola_cli::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing();

    if let Commands::Config {
        action: ConfigCommands::Path,
    } = &args.command
    {
        return commands::config::path();
    }

    let cfg = AppConfig::load(args.config.as_deref()).context("Configuration error")?;

    match &args.command {
        Commands::Quote(quote_args) => commands::quote::execute(quote_args, &cfg).await?,
        Commands::Invoice(invoice_args) => commands::invoice::execute(invoice_args, &cfg)?,
        Commands::Config { action } => match action {
            ConfigCommands::Show => commands::config::show(&cfg)?,
            ConfigCommands::Path => commands::config::path()?,
        },
    }

    Ok(())
}

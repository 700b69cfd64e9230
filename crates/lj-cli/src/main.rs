use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lj_cli::commands::{build_tree, flatten, from_api, occurrence, to_api};
use lj_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays valid JSON
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let pretty = cli.pretty || config.pretty;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::FromApi(args)) => from_api::run(&mut out, args, &config, pretty)?,
        Some(Commands::ToApi(args)) => to_api::run(&mut out, args, &config, pretty)?,
        Some(Commands::BuildTree(args)) => build_tree::run(&mut out, args, &config, pretty)?,
        Some(Commands::Flatten(args)) => flatten::run(&mut out, args, pretty)?,
        Some(Commands::Occurrence { action }) => {
            occurrence::run(&mut out, action, &config, pretty)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use agenda_cli::commands::{add, check, list, repeat};
use agenda_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so command output stays clean on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Add(args)) => {
            let config = load_config(cli.config.as_deref())?;
            add::run(&mut stdout, args, &config)?;
        }
        Some(Commands::List(args)) => {
            let config = load_config(cli.config.as_deref())?;
            list::run(&mut stdout, args, &config)?;
        }
        Some(Commands::Check(args)) => {
            let config = load_config(cli.config.as_deref())?;
            check::run(&mut stdout, args, &config)?;
        }
        Some(Commands::Repeat(args)) => {
            let config = load_config(cli.config.as_deref())?;
            repeat::run(&mut stdout, args, &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

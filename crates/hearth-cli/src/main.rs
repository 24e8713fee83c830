use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod format;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load();

    match cli.command {
        Commands::Stats {
            database,
            entity,
            format,
        } => {
            let database = config::resolve_database(database, &config)?;
            commands::cmd_stats(&database, entity.as_deref(), format)
        }
        Commands::Temps {
            database,
            since,
            until,
            output,
        } => {
            let database = config::resolve_database(database, &config)?;
            commands::cmd_temps(
                &database,
                since.as_deref(),
                until.as_deref(),
                &output,
                cli.no_color,
                &config,
            )
        }
    }
}

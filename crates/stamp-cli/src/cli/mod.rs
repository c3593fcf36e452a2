//! CLI for the stamp points viewer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stamp_core::config;

use commands::{run_card, run_points, run_resolve};

/// Top-level CLI for the stamp points viewer.
#[derive(Debug, Parser)]
#[command(name = "stamp")]
#[command(about = "Stamp card viewer: resolve user paths and look up points", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a route path and print the outcome.
    Resolve {
        /// Path as a browser would request it, e.g. "/" or "/E-Ting".
        path: String,
    },

    /// Fetch the points value for a user name.
    Points {
        /// Name exactly as it appears in the sheet's first column.
        name: String,
    },

    /// Resolve a path and render that user's stamp card.
    Card {
        /// Path as a browser would request it.
        path: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: sheet {:?} range {:?}", cfg.sheet_id, cfg.range);

        match cli.command {
            CliCommand::Resolve { path } => run_resolve(&path)?,
            CliCommand::Points { name } => run_points(&cfg, &name).await?,
            CliCommand::Card { path } => run_card(&cfg, &path).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

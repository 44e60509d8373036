//! CLI for the navsync replay tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

use crate::config::{self, ReportFormat};
use commands::{run_replay, run_resolve};

/// Top-level CLI for navsync.
#[derive(Debug, Parser)]
#[command(name = "navsync")]
#[command(about = "navsync: replay router navigation against a simulated browser history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Replay a navigation script and show every URL written to history.
    Replay {
        /// Path to the TOML navigation script.
        path: String,
        /// Origin of the simulated history (overrides config).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve the URL a single route would be shown under.
    Resolve {
        /// Route arguments as JSON (`"profile/42"`, `null`, `42`); non-JSON input is taken as a string.
        arguments: String,
        /// Path the browser currently shows.
        #[arg(long, default_value = "/", value_name = "PATH")]
        current_path: String,
        /// Route name (does not affect resolution).
        #[arg(long)]
        name: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Replay {
                path,
                base_url,
                json,
            } => {
                let base_url = base_url.unwrap_or(cfg.base_url);
                let format = if json { ReportFormat::Json } else { cfg.report };
                run_replay(Path::new(&path), &base_url, format)?;
            }
            CliCommand::Resolve {
                arguments,
                current_path,
                name,
            } => run_resolve(&arguments, &current_path, name)?,
        }

        Ok(())
    }
}

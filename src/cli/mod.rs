//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use crate::core::global_config::GlobalConfig;
use crate::error::BuildOrderError;
use crate::infra::dirs::BuildOrderDirs;
use commands::Commands;
use output::OutputConfig;

/// Buildorder - compute a valid build order for dependent projects
///
/// Reads projects and their dependencies from a manifest or the command
/// line and prints an order in which they can be built.
#[derive(Parser, Debug)]
#[command(name = "buildorder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let dirs = BuildOrderDirs::new();
        let config = GlobalConfig::load(&dirs).map_err(BuildOrderError::from)?;

        let output = OutputConfig::new(
            config.quiet(self.quiet),
            config.json(self.json),
            self.verbose,
        );
        output.apply_global();

        if let Some(cmd) = self.command {
            cmd.run(&config, &output).await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod input;
pub mod order;
pub mod roots;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::OutputConfig;
use crate::core::global_config::GlobalConfig;
use input::InputArgs;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a valid build order
    Order {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate projects and dependencies without building anything
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List projects that have no dependencies
    Roots {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, config: &GlobalConfig, output: &OutputConfig) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        match self {
            Self::Order { input } => order::execute(&current_dir, &input, config, output).await,
            Self::Check { input } => check::execute(&current_dir, &input, config, output).await,
            Self::Roots { input } => roots::execute(&current_dir, &input, config, output).await,
        }
    }
}

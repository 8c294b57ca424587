//! Check command implementation
//!
//! Implements `buildorder check` to validate projects and dependencies.

use std::path::Path;

use anyhow::{Context, Result};

use super::input::{self, InputArgs};
use crate::cli::output::{status, OutputConfig};
use crate::core::check;
use crate::core::global_config::GlobalConfig;
use crate::error::BuildOrderError;

/// Execute the check command
pub async fn execute(
    project_dir: &Path,
    input: &InputArgs,
    config: &GlobalConfig,
    output: &OutputConfig,
) -> Result<()> {
    let manifest = input::load(project_dir, input, config).await?;
    let result = check::check(&manifest)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if !output.quiet {
        println!("Checking dependency graph...\n");

        if let Some(failure) = &result.error {
            println!("{} {}", status::ERROR, failure.message);
            if !result.unresolved.is_empty() {
                println!("  Unresolved: {}", result.unresolved.join(", "));
            }
        } else {
            println!(
                "{} {} projects, {} dependencies",
                status::SUCCESS,
                result.projects,
                result.dependencies
            );
            println!("{} Valid build order found", status::SUCCESS);
        }

        if !result.roots.is_empty() {
            println!("\nRoots: {}", result.roots.join(", "));
        } else if !result.unresolved.is_empty() {
            println!("{} No project is free of dependencies", status::WARNING);
        }

        if !result.build_order.is_empty() {
            println!("\nBuild order:");
            for id in &result.build_order {
                println!("  • {id}");
            }
        }
        println!();
    }

    match &result.error {
        None => {
            if !output.json && !output.quiet {
                println!("{} Check passed", status::SUCCESS);
            }
            Ok(())
        }
        Some(failure) => {
            Err(BuildOrderError::from(failure.error.clone())).context("Check failed")
        }
    }
}

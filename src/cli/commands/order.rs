//! CLI command for printing the build order
//!
//! Implements the `buildorder order` command.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use super::input::{self, InputArgs};
use crate::cli::output::OutputConfig;
use crate::core::global_config::GlobalConfig;
use crate::core::order::order_manifest;

/// Execute the order command
pub async fn execute(
    project_dir: &Path,
    input: &InputArgs,
    config: &GlobalConfig,
    output: &OutputConfig,
) -> Result<()> {
    let manifest = input::load(project_dir, input, config).await?;

    tracing::info!(
        "Ordering {} projects with {} dependencies",
        manifest.projects.len(),
        manifest.dependencies.len()
    );

    let order = order_manifest(&manifest)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "order": order }))?);
    } else {
        for id in &order {
            println!("{id}");
        }
    }

    Ok(())
}

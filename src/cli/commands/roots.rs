//! CLI command for listing root projects
//!
//! Implements the `buildorder roots` command.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use super::input::{self, InputArgs};
use crate::cli::output::OutputConfig;
use crate::core::global_config::GlobalConfig;
use crate::core::graph::Graph;
use crate::core::project::Project;
use crate::error::OrderError;

/// Execute the roots command
pub async fn execute(
    project_dir: &Path,
    input: &InputArgs,
    config: &GlobalConfig,
    output: &OutputConfig,
) -> Result<()> {
    let manifest = input::load(project_dir, input, config).await?;
    if manifest.projects.is_empty() {
        return Err(OrderError::NoProjects.into());
    }

    let pairs = manifest.pairs()?;
    let mut graph = Graph::new();
    graph.populate(&manifest.projects, pairs.iter().map(|(a, b)| (a, b)))?;

    let roots: Vec<&str> = graph.roots().map(Project::id).collect();

    if output.json {
        println!("{}", serde_json::to_string_pretty(&json!({ "roots": roots }))?);
    } else {
        for id in roots {
            println!("{id}");
        }
    }

    Ok(())
}

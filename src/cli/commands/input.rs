//! Shared input arguments
//!
//! Every command reads the same input: an optional manifest file plus
//! projects and dependencies given on the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::core::global_config::GlobalConfig;
use crate::core::manifest::Manifest;

/// Where projects and dependencies come from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Manifest file (defaults to buildorder.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Project identifier, may be repeated
    #[arg(short, long = "project", value_name = "ID")]
    pub projects: Vec<String>,

    /// Dependency as 'dependency -> dependent', may be repeated
    #[arg(short, long = "dep", value_name = "PAIR")]
    pub dependencies: Vec<String>,
}

/// Load the manifest and merge in command-line values
///
/// An explicit `--file` must exist. The default manifest is only read when
/// present, so projects can be given purely on the command line.
pub async fn load(project_dir: &Path, input: &InputArgs, config: &GlobalConfig) -> Result<Manifest> {
    let mut manifest = match &input.file {
        Some(file) => {
            let path = project_dir.join(file);
            Manifest::load(&path)
                .await
                .with_context(|| format!("Failed to load manifest {}", path.display()))?
        }
        None => {
            let path = project_dir.join(config.manifest());
            if path.exists() {
                tracing::debug!("Using manifest {}", path.display());
                Manifest::load(&path)
                    .await
                    .with_context(|| format!("Failed to load manifest {}", path.display()))?
            } else {
                Manifest::default()
            }
        }
    };

    manifest.extend(&input.projects, &input.dependencies);
    Ok(manifest)
}

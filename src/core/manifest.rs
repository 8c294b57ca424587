//! Manifest (buildorder.toml) parsing
//!
//! The manifest lists the projects to order and their dependencies:
//!
//! ```toml
//! projects = ["app", "lib", "base"]
//! dependencies = [["base", "lib"], "lib -> app"]
//! ```
//!
//! A dependency is either a `[dependency, dependent]` array or a string in
//! one of the forms `dep -> dependent`, `dep:dependent`, `dep,dependent` or
//! `(dep, dependent)`.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Projects and dependencies to order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Project identifiers
    #[serde(default)]
    pub projects: Vec<String>,

    /// Dependency entries
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

/// A single dependency entry as written in the manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DependencySpec {
    /// `[dependency, dependent]`
    Pair(String, String),
    /// `"dependency -> dependent"` and friends
    Text(String),
}

impl DependencySpec {
    /// Resolve to a `(dependency, dependent)` pair
    pub fn resolve(&self) -> Result<(String, String), ManifestError> {
        match self {
            Self::Pair(dependency, dependent) => Ok((dependency.clone(), dependent.clone())),
            Self::Text(entry) => parse_dependency(entry),
        }
    }
}

fn dependency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\(?\s*([^\s,:()>]+)\s*(?:->|:|,)\s*([^\s,:()>]+)\s*\)?$")
            .expect("dependency pattern is valid")
    })
}

/// Parse a textual dependency such as `lib -> app`
pub fn parse_dependency(entry: &str) -> Result<(String, String), ManifestError> {
    let caps = dependency_pattern()
        .captures(entry.trim())
        .ok_or_else(|| ManifestError::InvalidDependency {
            entry: entry.to_string(),
        })?;

    Ok((caps[1].to_string(), caps[2].to_string()))
}

impl Manifest {
    /// Load manifest from file path
    pub async fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ManifestError::ReadError {
                    path: path.display().to_string(),
                    error: e.to_string(),
                })?;

        Self::from_toml(&content).map_err(|e| ManifestError::Parse {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Load manifest from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize manifest to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Append projects and textual dependencies (e.g. from the command line)
    pub fn extend(&mut self, projects: &[String], dependencies: &[String]) {
        self.projects.extend(projects.iter().cloned());
        self.dependencies
            .extend(dependencies.iter().cloned().map(DependencySpec::Text));
    }

    /// All dependencies as `(dependency, dependent)` pairs
    pub fn pairs(&self) -> Result<Vec<(String, String)>, ManifestError> {
        self.dependencies.iter().map(DependencySpec::resolve).collect()
    }
}

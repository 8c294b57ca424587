//! Check command logic
//!
//! Validates a manifest and reports what the graph looks like: how many
//! projects and edges it has, which projects are roots, and either the
//! build order or the projects that could not be resolved.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::graph::Graph;
use crate::core::manifest::Manifest;
use crate::core::project::Project;
use crate::error::{ErrorKind, ManifestError, OrderError};

/// Failure recorded in a check report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFailure {
    /// Error category
    pub kind: ErrorKind,
    /// Human readable message
    pub message: String,
    /// The ordering error itself
    #[serde(skip)]
    pub error: OrderError,
}

impl From<&OrderError> for CheckFailure {
    fn from(err: &OrderError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            error: err.clone(),
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Distinct projects
    pub projects: usize,
    /// Distinct dependency edges
    pub dependencies: usize,
    /// Projects without dependencies
    pub roots: Vec<String>,
    /// Build order, empty when none exists
    pub build_order: Vec<String>,
    /// Projects that could not be placed in the order
    pub unresolved: Vec<String>,
    /// Why the check failed, if it did
    pub error: Option<CheckFailure>,
}

impl CheckResult {
    /// Check if all validations passed
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    fn failed(mut self, err: &OrderError) -> Self {
        self.unresolved = err.unresolved().to_vec();
        self.error = Some(err.into());
        self
    }
}

/// Validate a manifest and report on its dependency graph
///
/// Malformed dependency entries are returned as errors; ordering problems
/// (empty project list, unknown projects, cycles) are recorded in the report.
/// Project and dependency counts are taken from the de-duplicated input, so
/// they are filled in even when the graph cannot be built.
pub fn check(manifest: &Manifest) -> Result<CheckResult, ManifestError> {
    let pairs = manifest.pairs()?;
    let projects: HashSet<&str> = manifest.projects.iter().map(String::as_str).collect();
    let edges: HashSet<(&str, &str)> = pairs
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();

    let result = CheckResult {
        projects: projects.len(),
        dependencies: edges.len(),
        ..CheckResult::default()
    };

    if manifest.projects.is_empty() {
        return Ok(result.failed(&OrderError::NoProjects));
    }

    let mut graph = Graph::new();
    if let Err(err) = graph.populate(&manifest.projects, pairs.iter().map(|(a, b)| (a, b))) {
        return Ok(result.failed(&err));
    }

    let result = CheckResult {
        roots: graph.roots().map(Project::id).map(String::from).collect(),
        ..result
    };

    tracing::info!(
        projects = result.projects,
        dependencies = result.dependencies,
        "Checking dependency graph"
    );

    match graph.build_order_ids() {
        Ok(order) => Ok(CheckResult {
            build_order: order,
            ..result
        }),
        Err(err) => Ok(result.failed(&err)),
    }
}

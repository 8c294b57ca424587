//! Build order entry point
//!
//! Validates the raw inputs and delegates to [`Graph`].

use tracing::debug;

use crate::core::graph::Graph;
use crate::core::manifest::Manifest;
use crate::error::{BuildOrderError, OrderError};

/// Compute a build order for `projects`
///
/// `dependencies` holds `(dependency, dependent)` pairs. The result lists
/// every distinct project exactly once, each after all of its dependencies.
///
/// # Errors
///
/// - [`OrderError::NoProjects`] when `projects` is empty
/// - [`OrderError::UnknownProject`] when a pair names a project not in `projects`
/// - [`OrderError::NoValidOrder`] when the dependencies contain a cycle
pub fn compute_build_order<S, A, B>(
    projects: &[S],
    dependencies: &[(A, B)],
) -> Result<Vec<String>, OrderError>
where
    S: AsRef<str>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    if projects.is_empty() {
        return Err(OrderError::NoProjects);
    }

    debug!(
        projects = projects.len(),
        dependencies = dependencies.len(),
        "Computing build order"
    );

    let mut graph = Graph::new();
    graph.populate(projects, dependencies.iter().map(|(a, b)| (a, b)))?;
    graph.build_order_ids()
}

/// Compute the build order for everything listed in a manifest
pub fn order_manifest(manifest: &Manifest) -> Result<Vec<String>, BuildOrderError> {
    let pairs = manifest.pairs()?;
    Ok(compute_build_order(&manifest.projects, &pairs)?)
}

//! Project nodes
//!
//! A project tracks its identity, how many of its dependencies are still
//! unresolved, and the reverse edges to the projects that depend on it.

use crate::error::OrderError;

/// Handle of a project inside a [`Graph`](crate::core::graph::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(usize);

impl ProjectId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the project in insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single project in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: String,
    /// Number of dependency edges pointing at this project
    dependencies: usize,
    /// Projects that depend on this one ("parents"), in insertion order
    parents: Vec<ProjectId>,
}

impl Project {
    /// Create a project with no dependencies
    ///
    /// Fails with [`OrderError::InvalidProject`] for an empty identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, OrderError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OrderError::InvalidProject);
        }
        Ok(Self {
            id,
            dependencies: 0,
            parents: Vec::new(),
        })
    }

    /// Project identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of distinct dependencies recorded for this project
    pub fn dependencies(&self) -> usize {
        self.dependencies
    }

    /// Projects that depend on this one
    pub fn parents(&self) -> &[ProjectId] {
        &self.parents
    }

    pub(crate) fn increment_dependencies(&mut self) {
        self.dependencies += 1;
    }

    pub(crate) fn register_parent(&mut self, dependent: ProjectId) {
        self.parents.push(dependent);
    }
}

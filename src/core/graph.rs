//! Dependency graph and build ordering
//!
//! The graph owns every [`Project`] in an arena and keeps, alongside it, the
//! set of roots (projects with no dependencies). Roots are maintained while
//! edges are added, so ordering can start from them without scanning every
//! node again.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use tracing::{debug, trace, warn};

use crate::core::project::{Project, ProjectId};
use crate::error::OrderError;

/// Dependency graph for projects
#[derive(Debug, Default)]
pub struct Graph {
    /// All projects, indexed by [`ProjectId`]
    projects: Vec<Project>,
    /// Identifier lookup
    index: HashMap<String, ProjectId>,
    /// Projects without dependencies, in insertion order
    roots: BTreeSet<ProjectId>,
    /// Distinct `(dependency, dependent)` edges
    edges: HashSet<(ProjectId, ProjectId)>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all projects, roots and edges
    pub fn clear(&mut self) {
        self.projects.clear();
        self.index.clear();
        self.roots.clear();
        self.edges.clear();
    }

    /// Rebuild the graph from project identifiers and dependency pairs
    ///
    /// Each pair is `(dependency, dependent)`: the dependent cannot be built
    /// until the dependency is. Duplicate identifiers collapse onto the first
    /// occurrence and duplicate pairs are ignored.
    ///
    /// Any previous content is discarded. On error the graph is left empty.
    pub fn populate<I, S, D, A, B>(&mut self, ids: I, dependencies: D) -> Result<(), OrderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        D: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        self.clear();

        let result = self.populate_inner(ids, dependencies);
        if result.is_err() {
            self.clear();
        }
        result
    }

    fn populate_inner<I, S, D, A, B>(&mut self, ids: I, dependencies: D) -> Result<(), OrderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        D: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        for id in ids {
            self.add_project(id.as_ref())?;
        }

        for (dependency, dependent) in dependencies {
            let (dependency, dependent) = (dependency.as_ref(), dependent.as_ref());

            let (Some(dependency_id), Some(dependent_id)) =
                (self.index.get(dependency).copied(), self.index.get(dependent).copied())
            else {
                return Err(OrderError::UnknownProject {
                    dependency: dependency.to_string(),
                    dependent: dependent.to_string(),
                });
            };

            self.roots.remove(&dependent_id);
            self.add_dependency(dependent_id, dependency_id);
        }

        debug!(
            projects = self.projects.len(),
            edges = self.edges.len(),
            roots = self.roots.len(),
            "Populated dependency graph"
        );

        Ok(())
    }

    fn add_project(&mut self, id: &str) -> Result<ProjectId, OrderError> {
        if let Some(&existing) = self.index.get(id) {
            return Ok(existing);
        }

        let project = Project::new(id)?;
        let handle = ProjectId::new(self.projects.len());

        self.projects.push(project);
        self.index.insert(id.to_string(), handle);
        self.roots.insert(handle);

        Ok(handle)
    }

    /// Count `dependency` against `dependent` and register the reverse edge
    fn add_dependency(&mut self, dependent: ProjectId, dependency: ProjectId) {
        if !self.edges.insert((dependency, dependent)) {
            warn!(
                dependency = self.projects[dependency.index()].id(),
                dependent = self.projects[dependent.index()].id(),
                "Ignoring duplicate dependency"
            );
            return;
        }

        self.projects[dependent.index()].increment_dependencies();
        self.projects[dependency.index()].register_parent(dependent);
    }

    /// Compute a build order (Kahn's algorithm)
    ///
    /// Returns projects so that every project appears after all of its
    /// dependencies. Roots are processed in identifier order and dependents
    /// are released in the order their edges were added, so the result is
    /// deterministic for a given input.
    ///
    /// The graph itself is not modified; remaining dependency counts are
    /// tracked separately, so this can be called any number of times.
    pub fn build_order(&self) -> Result<Vec<&Project>, OrderError> {
        let mut remaining: Vec<usize> = self.projects.iter().map(Project::dependencies).collect();
        let mut resolved = vec![false; self.projects.len()];
        let mut order = Vec::with_capacity(self.projects.len());
        let mut queue: VecDeque<ProjectId> = self.roots.iter().copied().collect();

        while let Some(&next) = queue.front() {
            if remaining[next.index()] != 0 {
                break;
            }
            queue.pop_front();

            let project = &self.projects[next.index()];
            trace!(project = project.id(), "Resolved project");
            resolved[next.index()] = true;
            order.push(project);

            for &parent in project.parents() {
                let count = &mut remaining[parent.index()];
                *count -= 1;
                if *count == 0 {
                    queue.push_back(parent);
                }
            }
        }

        if order.len() != self.projects.len() {
            let unresolved: Vec<String> = self
                .projects
                .iter()
                .zip(&resolved)
                .filter(|(_, done)| !**done)
                .map(|(project, _)| project.id().to_string())
                .collect();

            debug!(
                resolved = order.len(),
                unresolved = unresolved.len(),
                "No valid build order"
            );
            return Err(OrderError::NoValidOrder { unresolved });
        }

        debug!(projects = order.len(), "Computed build order");
        Ok(order)
    }

    /// Compute a build order as project identifiers
    pub fn build_order_ids(&self) -> Result<Vec<String>, OrderError> {
        Ok(self
            .build_order()?
            .into_iter()
            .map(|project| project.id().to_string())
            .collect())
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if the graph has no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of distinct dependency edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a project by identifier
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.index.get(id).map(|handle| &self.projects[handle.index()])
    }

    /// All projects in identifier order
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Projects without dependencies, in identifier order
    pub fn roots(&self) -> impl Iterator<Item = &Project> {
        self.roots.iter().map(|handle| &self.projects[handle.index()])
    }

    /// Projects that directly depend on `id`
    pub fn dependents(&self, id: &str) -> Option<Vec<&Project>> {
        self.project(id).map(|project| {
            project
                .parents()
                .iter()
                .map(|handle| &self.projects[handle.index()])
                .collect()
        })
    }
}

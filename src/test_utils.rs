//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Project identifiers paired with `(dependency, dependent)` edges
    pub type GraphInput = (Vec<String>, Vec<(String, String)>);

    /// Generate a valid project name (lowercase alphanumeric with hyphens)
    pub fn project_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,10}"
    }

    /// Generate a set of distinct project names
    pub fn project_names(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::hash_set(project_name(), 1..=max)
            .prop_map(|names| names.into_iter().collect())
    }

    /// Generate an acyclic graph
    ///
    /// Edges only point from an earlier name to a later one in generation
    /// order; the identifier list is shuffled afterwards so roots are not
    /// always listed first.
    pub fn dag() -> impl Strategy<Value = GraphInput> {
        project_names(12)
            .prop_flat_map(|names| {
                let n = names.len();
                (Just(names), prop::collection::vec((0..n, 0..n), 0..=n * 2))
            })
            .prop_map(|(names, edges)| {
                let pairs = edges
                    .into_iter()
                    .filter(|(from, to)| from < to)
                    .map(|(from, to)| (names[from].clone(), names[to].clone()))
                    .collect::<Vec<_>>();
                (names, pairs)
            })
            .prop_flat_map(|(names, pairs)| (Just(names).prop_shuffle(), Just(pairs)))
    }

    /// Generate a graph that contains at least one cycle
    ///
    /// Starts from an acyclic graph and closes a loop between two of its
    /// projects (possibly the same one, giving a self-dependency).
    pub fn cyclic_graph() -> impl Strategy<Value = GraphInput> {
        dag()
            .prop_flat_map(|(names, pairs)| {
                let n = names.len();
                (Just(names), Just(pairs), 0..n, 0..n)
            })
            .prop_map(|(names, mut pairs, a, b)| {
                pairs.push((names[a].clone(), names[b].clone()));
                pairs.push((names[b].clone(), names[a].clone()));
                (names, pairs)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_project_names_are_distinct_and_non_empty(names in project_names(12)) {
            let unique: HashSet<&String> = names.iter().collect();
            prop_assert_eq!(unique.len(), names.len());
            prop_assert!(names.iter().all(|name| !name.is_empty()));
        }

        #[test]
        fn test_dag_edges_reference_known_projects((names, pairs) in dag()) {
            for (dependency, dependent) in &pairs {
                prop_assert!(names.contains(dependency));
                prop_assert!(names.contains(dependent));
                prop_assert_ne!(dependency, dependent);
            }
        }

        #[test]
        fn test_cyclic_graph_closes_a_loop((_names, pairs) in cyclic_graph()) {
            let (last_dependency, last_dependent) = &pairs[pairs.len() - 1];
            let closing = (last_dependent.clone(), last_dependency.clone());
            prop_assert!(pairs.contains(&closing));
        }
    }
}

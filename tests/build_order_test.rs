//! Library-level tests for build order computation
//!
//! Drives `compute_build_order` and `Graph` with the reference scenarios:
//! empty input, independent projects, a resolvable graph, cycles and
//! unknown projects.

use std::collections::HashMap;

use buildorder::core::graph::Graph;
use buildorder::core::order::compute_build_order;
use buildorder::error::{ErrorKind, OrderError};

const SIX: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

const ACYCLIC: [(&str, &str); 5] = [("a", "d"), ("f", "b"), ("b", "d"), ("f", "a"), ("d", "c")];

const CYCLIC: [(&str, &str); 7] = [
    ("a", "d"),
    ("f", "b"),
    ("b", "d"),
    ("f", "a"),
    ("d", "c"),
    ("e", "f"),
    ("a", "e"),
];

const NONE: [(&str, &str); 0] = [];

/// Every dependency is placed before its dependent
fn assert_valid(order: &[String], pairs: &[(&str, &str)]) {
    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();
    for (dependency, dependent) in pairs {
        assert!(
            position[dependency] < position[dependent],
            "{dependency} must come before {dependent} in {order:?}"
        );
    }
}

/// Every project appears exactly once
fn assert_complete(order: &[String], projects: &[&str]) {
    let mut sorted: Vec<&str> = order.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    let mut expected = projects.to_vec();
    expected.sort_unstable();
    expected.dedup();
    assert_eq!(sorted, expected);
}

#[test]
fn test_no_projects() {
    let projects: [&str; 0] = [];
    let err = compute_build_order(&projects, &NONE).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.to_string(), "No projects provided");
}

#[test]
fn test_projects_without_dependencies() {
    let order = compute_build_order(&SIX, &NONE).unwrap();
    assert_complete(&order, &SIX);
}

#[test]
fn test_resolvable_dependencies() {
    let order = compute_build_order(&SIX, &ACYCLIC).unwrap();

    assert_eq!(order.len(), 6);
    assert_complete(&order, &SIX);
    assert_valid(&order, &ACYCLIC);
}

#[test]
fn test_cycle_has_no_valid_order() {
    let err = compute_build_order(&SIX, &CYCLIC).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoValidOrder);
    assert_eq!(err.to_string(), "No valid build order");
}

#[test]
fn test_cycle_with_isolated_projects() {
    let projects = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let err = compute_build_order(&projects, &CYCLIC).unwrap_err();

    assert_eq!(err.to_string(), "No valid build order");
}

#[test]
fn test_unknown_project_in_pair() {
    let err = compute_build_order(&SIX, &[("x", "a")]).unwrap_err();

    assert_eq!(
        err,
        OrderError::UnknownProject {
            dependency: "x".to_string(),
            dependent: "a".to_string(),
        }
    );
    let message = err.to_string();
    assert!(message.contains('x') && message.contains('a'), "{message}");
}

#[test]
fn test_duplicate_projects_are_collapsed() {
    let order = compute_build_order(&["a", "b", "a", "b"], &[("b", "a")]).unwrap();
    assert_eq!(order, ["b", "a"]);
}

#[test]
fn test_graph_reuse_across_computations() {
    let mut graph = Graph::new();

    graph.populate(SIX, CYCLIC).unwrap();
    assert!(graph.build_order().is_err());

    graph.populate(SIX, ACYCLIC).unwrap();
    let order = graph.build_order_ids().unwrap();
    assert_complete(&order, &SIX);
    assert_valid(&order, &ACYCLIC);
}

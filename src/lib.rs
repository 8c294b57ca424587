//! Buildorder - dependency-ordered builds
//!
//! Computes an order in which a set of projects can be built so that every
//! project comes after the projects it depends on, or reports that no such
//! order exists because the dependencies form a cycle.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic: projects, the dependency graph, ordering
//! - [`infra`] - Infrastructure layer (platform directories)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```
//! use buildorder::core::order::compute_build_order;
//!
//! let order = compute_build_order(&["app", "lib"], &[("lib", "app")]).unwrap();
//! assert_eq!(order, ["lib", "app"]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;

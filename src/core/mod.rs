//! Core business logic module
//!
//! This module contains all business logic for buildorder.
//! Apart from manifest and config loading it does no I/O.
//!
//! # Submodules
//!
//! - [`project`] - Project nodes and their dependency bookkeeping
//! - [`graph`] - Dependency graph and build ordering
//! - [`order`] - Build order entry point
//! - [`manifest`] - Manifest (buildorder.toml) parsing
//! - [`check`] - Validation report
//! - [`global_config`] - Global configuration management

pub mod check;
pub mod global_config;
pub mod graph;
pub mod manifest;
pub mod order;
pub mod project;

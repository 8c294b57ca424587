//! Configuration constants
//!
//! - [`defaults`] - Default file names and settings

pub mod defaults;

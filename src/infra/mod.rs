//! Infrastructure layer
//!
//! Handles platform-specific paths. The core never touches the
//! environment directly.

pub mod dirs;

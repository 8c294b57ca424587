//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary working directory and an isolated config directory,
/// so a user's own `config.toml` never leaks into a test run.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Config directory used by commands run through this project
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join(".config")
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Write the global config file
    #[allow(dead_code)]
    pub fn create_config(&self, content: &str) {
        self.create_file(".config/config.toml", content);
    }

    /// Run buildorder with the given arguments
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_buildorder"))
            .current_dir(self.path())
            .env("BUILDORDER_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute buildorder")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a finished command
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Six projects with a valid order
#[allow(dead_code)]
pub const ACYCLIC_MANIFEST: &str = r#"
projects = ["a", "b", "c", "d", "e", "f"]
dependencies = [
    ["a", "d"],
    ["f", "b"],
    ["b", "d"],
    ["f", "a"],
    ["d", "c"],
]
"#;

/// Six projects where a -> e -> f -> a forms a cycle
#[allow(dead_code)]
pub const CYCLIC_MANIFEST: &str = r#"
projects = ["a", "b", "c", "d", "e", "f"]
dependencies = [
    "a -> d",
    "f -> b",
    "b -> d",
    "f -> a",
    "d -> c",
    "e -> f",
    "a -> e",
]
"#;

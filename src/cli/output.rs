//! Output formatting
//!
//! Global output settings (quiet, JSON, verbosity), status prefixes and
//! error rendering for the command line.

use std::sync::OnceLock;

use serde_json::json;
use tracing::Level;

use crate::error::{BuildOrderError, ErrorKind, OrderError};

static GLOBAL: OnceLock<OutputConfig> = OnceLock::new();

/// Output settings for the current invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything but results and errors
    pub quiet: bool,
    /// Emit JSON instead of text
    pub json: bool,
    /// Verbosity level (number of `-v` flags)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Make this configuration visible to [`display_error`]
    ///
    /// Only the first call has an effect.
    pub fn apply_global(&self) {
        let _ = GLOBAL.set(*self);
    }

    /// The configuration set by [`OutputConfig::apply_global`], or defaults
    pub fn global() -> Self {
        GLOBAL.get().copied().unwrap_or_default()
    }
}

/// Log level for the given verbosity flags
pub fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn classify(error: &anyhow::Error) -> (Option<ErrorKind>, Vec<String>) {
    if let Some(err) = error.downcast_ref::<BuildOrderError>() {
        let unresolved = err
            .as_order_error()
            .map(|e| e.unresolved().to_vec())
            .unwrap_or_default();
        return (Some(err.kind()), unresolved);
    }
    if let Some(err) = error.downcast_ref::<OrderError>() {
        return (Some(err.kind()), err.unresolved().to_vec());
    }
    (None, Vec::new())
}

/// Render an error to stderr, as JSON when JSON output is enabled
pub fn display_error(error: &anyhow::Error) {
    let config = OutputConfig::global();
    let (kind, unresolved) = classify(error);

    if config.json {
        let body = json!({
            "error": {
                "kind": kind,
                "message": format!("{error:#}"),
                "unresolved": unresolved,
            }
        });
        eprintln!("{body}");
        return;
    }

    eprintln!("{} {error:#}", status::ERROR);
    if !unresolved.is_empty() {
        eprintln!("  Unresolved projects: {}", unresolved.join(", "));
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

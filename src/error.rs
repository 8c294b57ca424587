//! Error types for buildorder
//!
//! Domain-specific error types using thiserror.

use serde::Serialize;
use thiserror::Error;

/// Broad category of an ordering failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or inconsistent caller-supplied data
    InvalidInput,
    /// The dependency graph cannot be fully resolved
    NoValidOrder,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::NoValidOrder => write!(f, "no valid order"),
        }
    }
}

/// Build order computation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Project list is empty
    #[error("No projects provided")]
    NoProjects,

    /// Project identifier is empty
    #[error("Invalid project")]
    InvalidProject,

    /// A dependency pair references a project that is not in the project list
    #[error("Project '{dependency}' and/or '{dependent}' does not exist")]
    UnknownProject {
        dependency: String,
        dependent: String,
    },

    /// Some projects could never be resolved (cycle)
    #[error("No valid build order")]
    NoValidOrder { unresolved: Vec<String> },
}

impl OrderError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoProjects | Self::InvalidProject | Self::UnknownProject { .. } => {
                ErrorKind::InvalidInput
            }
            Self::NoValidOrder { .. } => ErrorKind::NoValidOrder,
        }
    }

    /// Projects left unresolved, if this is an ordering failure
    pub fn unresolved(&self) -> &[String] {
        match self {
            Self::NoValidOrder { unresolved } => unresolved,
            _ => &[],
        }
    }
}

/// Manifest loading errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file does not exist
    #[error("Manifest not found at '{path}'")]
    NotFound { path: String },

    /// Manifest could not be read
    #[error("Failed to read manifest '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Manifest is not valid TOML or has the wrong shape
    #[error("Failed to parse manifest '{path}': {error}")]
    Parse { path: String, error: String },

    /// Dependency entry could not be parsed
    #[error("Invalid dependency '{entry}': expected 'dependency -> dependent'")]
    InvalidDependency { entry: String },
}

/// Top-level buildorder error type
#[derive(Error, Debug)]
pub enum BuildOrderError {
    /// Ordering error
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Global configuration error
    #[error(transparent)]
    Config(#[from] crate::core::global_config::GlobalConfigError),
}

impl BuildOrderError {
    /// Category of this error
    ///
    /// Manifest and configuration problems count as invalid input.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Order(e) => e.kind(),
            Self::Manifest(_) | Self::Config(_) => ErrorKind::InvalidInput,
        }
    }

    /// The ordering error behind this failure, if any
    pub fn as_order_error(&self) -> Option<&OrderError> {
        match self {
            Self::Order(e) => Some(e),
            _ => None,
        }
    }
}

//! Global configuration management
//!
//! Reads settings from `config.toml` in the config directory: output
//! preferences and the default manifest file name. Command-line flags
//! take precedence over anything set here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::defaults::DEFAULT_MANIFEST;
use crate::infra::dirs::BuildOrderDirs;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for buildorder
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,

    /// Input defaults
    #[serde(default)]
    pub input: InputConfig,
}

/// Output preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable quiet mode
    pub quiet: Option<bool>,

    /// Enable JSON output
    pub json: Option<bool>,
}

/// Input defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Manifest file name, relative to the working directory
    pub manifest: Option<String>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// A missing file yields the default configuration.
    pub fn load(dirs: &BuildOrderDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective manifest file name
    #[must_use]
    pub fn manifest(&self) -> &str {
        self.input.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST)
    }

    /// Whether JSON output is on, given the command-line flag
    #[must_use]
    pub fn json(&self, flag: bool) -> bool {
        flag || self.output.json.unwrap_or(false)
    }

    /// Whether quiet mode is on, given the command-line flag
    #[must_use]
    pub fn quiet(&self, flag: bool) -> bool {
        flag || self.output.quiet.unwrap_or(false)
    }
}

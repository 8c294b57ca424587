//! Platform-specific directory management
//!
//! Provides the location of the user configuration directory.
//! Follows the XDG Base Directory Specification on Linux and standard
//! locations on macOS.
//!
//! `BUILDORDER_CONFIG_DIR` overrides the default directory.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::GLOBAL_CONFIG_FILE;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "BUILDORDER_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "buildorder";

/// Platform-specific directory provider for buildorder
#[derive(Debug, Clone)]
pub struct BuildOrderDirs {
    config_dir: PathBuf,
}

impl BuildOrderDirs {
    /// Create a new `BuildOrderDirs` instance
    ///
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/buildorder` or `~/.config/buildorder`
    /// - macOS: `~/Library/Application Support/buildorder`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(GLOBAL_CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for BuildOrderDirs {
    fn default() -> Self {
        Self::new()
    }
}

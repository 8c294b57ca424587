//! Default configuration values

/// Default project manifest file name
pub const DEFAULT_MANIFEST: &str = "buildorder.toml";

/// Global config file name inside the config directory
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;

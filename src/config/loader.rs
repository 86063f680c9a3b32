//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the data root, falling back to defaults.
///
/// If config.json exists, it will be read and missing fields filled with
/// defaults. If it doesn't exist, default configuration is returned.
///
/// # Arguments
/// * `root` - Directory containing `.journeymap`
///
/// # Errors
/// * `ConfigError` - If config.json exists but cannot be parsed
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    debug!(storage_key = %config.storage_key, "Loaded config");
    Ok(config)
}

/// Write configuration to the data root.
pub fn save_config(root: &Path, config: &Config) -> Result<()> {
    fs::write_config(root, config)
}

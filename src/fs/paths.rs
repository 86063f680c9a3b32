//! Path resolution utilities for journeymap
//!
//! Provides functions to locate the data root and construct paths to the
//! config file and the persisted state blob.

use std::path::{Path, PathBuf};

use crate::errors::{JourneyError, Result};

/// Name of the directory holding config and state
pub const DATA_DIR_NAME: &str = ".journeymap";

/// Find the nearest directory containing a .journeymap directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `DataDirNotFound` - If no ancestor has a .journeymap directory
pub fn find_data_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| JourneyError::DataDirNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if get_data_dir(&current).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(JourneyError::DataDirNotFound(
                    "Could not find a .journeymap directory; run `journeymap init` first"
                        .to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .journeymap directory.
pub fn get_data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR_NAME)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_data_dir(root).join("config.json")
}

/// Get the path of the state blob stored under `storage_key`.
pub fn get_state_path(root: &Path, storage_key: &str) -> PathBuf {
    get_data_dir(root).join(format!("{}.json", storage_key))
}

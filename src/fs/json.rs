//! JSON file operations
//!
//! Provides functions to read and write JSON files through serde.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{JourneyError, Result};
use crate::schemas::Config;

use super::paths::get_config_path;

/// Read a whole text file, mapping a missing file to `FileNotFound`.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            JourneyError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            JourneyError::Io(e)
        }
    })
}

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|e| {
        JourneyError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write text to a file atomically: write a temp file, then rename over the target.
///
/// Creates the parent directory when missing.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Serialize a value to a JSON file with pretty formatting.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| JourneyError::InvalidJson(e.to_string()))?;
    write_atomic(path, &content)
}

/// Read the config.json file under the data root, or defaults if absent.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path).map_err(|e| JourneyError::ConfigError(e.to_string()))
}

/// Write the config.json file under the data root.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Column;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Column> = read_json(&path);
        assert!(matches!(result.unwrap_err(), JourneyError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Column> = read_json(&path);
        assert!(matches!(result.unwrap_err(), JourneyError::InvalidJson(_)));
    }

    #[test]
    fn test_write_and_read_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("column.json");
        let column = Column::new("c1".to_string(), "Step 1".to_string());

        write_json(&path, &column).unwrap();
        let read: Column = read_json(&path).unwrap();
        assert_eq!(read, column);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("state.json");

        write_atomic(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_config_round_trip_and_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(read_config(temp.path()).unwrap(), Config::default());

        let config = Config {
            seed_sample_data: false,
            ..Config::default()
        };
        write_config(temp.path(), &config).unwrap();
        assert_eq!(read_config(temp.path()).unwrap(), config);
    }

    #[test]
    fn test_bad_config_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = get_config_path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1, 2]").unwrap();

        let err = read_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}

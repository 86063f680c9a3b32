//! Storage backends for the state blob

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs;

/// Key-addressed blob storage, one blob per backend instance
pub trait StateStorage {
    /// Read the stored blob, `None` when nothing has been stored yet
    fn load_blob(&self) -> Result<Option<String>>;

    /// Replace the stored blob
    fn save_blob(&mut self, blob: &str) -> Result<()>;
}

/// Blob kept in a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        FileStorage { path }
    }

    /// Storage for `storage_key` under the data root
    pub fn for_root(root: &Path, storage_key: &str) -> Self {
        FileStorage::new(fs::get_state_path(root, storage_key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStorage for FileStorage {
    fn load_blob(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_text(&self.path).map(Some)
    }

    fn save_blob(&mut self, blob: &str) -> Result<()> {
        fs::write_atomic(&self.path, blob)
    }
}

/// In-memory blob, used by tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        MemoryStorage {
            blob: Some(blob.into()),
            writes: 0,
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of times `save_blob` has been called
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStorage for MemoryStorage {
    fn load_blob(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save_blob(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}

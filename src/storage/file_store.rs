//! File-backed storage port with atomic writes
//!
//! Each key maps to one JSON document at `<root>/<key>.json`. Writes go to a
//! temp file in the same directory, are flushed and synced, then renamed into
//! place, so a document is either completely written or not modified at all.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

use super::port::StoragePort;

/// Storage port backed by one file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `root`, creating the directory if needed
    pub fn new(root: impl Into<PathBuf>) -> TrackerResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create storage directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    /// The root directory documents are stored under
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StoragePort for FileStore {
    fn load(&self, key: &str) -> TrackerResult<Option<Vec<u8>>> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read(&path)
            .map(Some)
            .map_err(|e| TrackerError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn save(&self, key: &str, bytes: &[u8]) -> TrackerResult<()> {
        let path = self.entry_path(key);

        // Temp file in the same directory (important for atomic rename)
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            TrackerError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TrackerError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

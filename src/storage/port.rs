//! Storage port abstraction
//!
//! The aggregation and service layers never touch the filesystem directly;
//! they go through a key/value port so the core stays testable against an
//! in-memory backend.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Capability to load and save opaque documents by key
///
/// Keys follow the `expenses_<userId>` / `todos_<userId>` / `registeredUsers`
/// / `current_user` convention; the port itself treats them as opaque.
pub trait StoragePort: Send + Sync {
    /// Load the document stored under `key`, or `None` if absent
    fn load(&self, key: &str) -> TrackerResult<Option<Vec<u8>>>;

    /// Save a document under `key`, replacing any previous value
    fn save(&self, key: &str, bytes: &[u8]) -> TrackerResult<()>;

    /// Remove the document stored under `key`, if any
    fn remove(&self, key: &str) -> TrackerResult<()>;
}

/// Read and deserialize a JSON document from the port
///
/// A missing key is `Ok(None)`; a present but unparseable document is a
/// storage error, never silently treated as empty.
pub fn read_entry<T, P>(port: &P, key: &str) -> TrackerResult<Option<T>>
where
    T: DeserializeOwned,
    P: StoragePort + ?Sized,
{
    match port.load(key)? {
        None => Ok(None),
        Some(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| TrackerError::Storage(format!("Failed to parse '{}': {}", key, e))),
    }
}

/// Serialize and write a JSON document to the port
pub fn write_entry<T, P>(port: &P, key: &str, value: &T) -> TrackerResult<()>
where
    T: Serialize,
    P: StoragePort + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize '{}': {}", key, e)))?;
    port.save(key, &bytes)
}

/// In-memory storage backend, used in tests and available as a scratch mode
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoragePort for MemoryStore {
    fn load(&self, key: &str) -> TrackerResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> TrackerResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

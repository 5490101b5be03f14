//! Storage layer for fintrack
//!
//! Entity repositories serialize JSON documents through an injected
//! [`StoragePort`], keeping the rest of the crate independent of where the
//! bytes actually live. The default port is a one-file-per-key store with
//! atomic writes.

pub mod expenses;
pub mod file_store;
pub mod port;
pub mod todos;
pub mod users;

pub use expenses::ExpenseRepository;
pub use file_store::FileStore;
pub use port::{MemoryStore, StoragePort};
pub use todos::TodoRepository;
pub use users::{UserRepository, CURRENT_USER_KEY, REGISTERED_USERS_KEY};

use std::sync::Arc;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Main storage coordinator that provides access to all repositories
pub struct Store {
    pub expenses: ExpenseRepository,
    pub todos: TodoRepository,
    pub users: UserRepository,
}

impl Store {
    /// Create a store over any storage port
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self {
            expenses: ExpenseRepository::new(Arc::clone(&port)),
            todos: TodoRepository::new(Arc::clone(&port)),
            users: UserRepository::new(port),
        }
    }

    /// Create a file-backed store under the configured data directory
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        let port = FileStore::new(paths.data_dir())?;
        Ok(Self::new(Arc::new(port)))
    }

    /// Create a store backed by memory only (used in tests)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = Store::open(&paths).unwrap();
        assert!(paths.data_dir().exists());
        assert!(store.users.list().unwrap().is_empty());
    }

    #[test]
    fn test_repositories_share_one_port() {
        let store = Store::in_memory();
        let ada = crate::models::User::new("ada@example.com", "Ada Lovelace");

        store.users.add(&ada).unwrap();
        store.users.set_current(&ada).unwrap();

        assert_eq!(store.users.current().unwrap(), Some(ada));
    }
}

//! Profile repository
//!
//! Persists the profile registry under the `registeredUsers` key and the
//! active profile under `current_user`.

use std::sync::Arc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{User, UserId};

use super::port::{read_entry, write_entry, StoragePort};

/// Storage key for the profile registry
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

/// Storage key for the active profile
pub const CURRENT_USER_KEY: &str = "current_user";

/// Repository for profile persistence
pub struct UserRepository {
    port: Arc<dyn StoragePort>,
}

impl UserRepository {
    /// Create a new profile repository over a storage port
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self { port }
    }

    /// Load all registered profiles
    pub fn list(&self) -> TrackerResult<Vec<User>> {
        Ok(read_entry(self.port.as_ref(), REGISTERED_USERS_KEY)?.unwrap_or_default())
    }

    /// Get a profile by id
    pub fn get(&self, id: UserId) -> TrackerResult<Option<User>> {
        Ok(self.list()?.into_iter().find(|u| u.id == id))
    }

    /// Find a profile by email (case-insensitive)
    pub fn find_by_email(&self, email: &str) -> TrackerResult<Option<User>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    /// Register a new profile; the email must be unused
    pub fn add(&self, user: &User) -> TrackerResult<()> {
        let mut users = self.list()?;

        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(TrackerError::Duplicate {
                entity_type: "Profile",
                identifier: user.email.clone(),
            });
        }

        users.push(user.clone());
        write_entry(self.port.as_ref(), REGISTERED_USERS_KEY, &users)
    }

    /// Load the active profile, if one is set
    pub fn current(&self) -> TrackerResult<Option<User>> {
        read_entry(self.port.as_ref(), CURRENT_USER_KEY)
    }

    /// Set the active profile
    pub fn set_current(&self, user: &User) -> TrackerResult<()> {
        write_entry(self.port.as_ref(), CURRENT_USER_KEY, user)
    }

    /// Clear the active profile
    pub fn clear_current(&self) -> TrackerResult<()> {
        self.port.remove(CURRENT_USER_KEY)
    }
}

//! Profile service
//!
//! Creates, lists and switches local profiles. A profile is just a named
//! namespace for expense and task lists; there are no credentials.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{User, UserId};
use crate::storage::Store;

/// Service for profile management
pub struct ProfileService<'a> {
    store: &'a Store,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a new profile and make it the active one
    pub fn create(&self, email: &str, name: &str) -> TrackerResult<User> {
        let user = User::new(email.trim(), name.trim());
        user.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.store.users.add(&user)?;
        self.store.users.set_current(&user)?;
        Ok(user)
    }

    /// List all registered profiles
    pub fn list(&self) -> TrackerResult<Vec<User>> {
        self.store.users.list()
    }

    /// Switch the active profile by email or id
    pub fn switch(&self, identifier: &str) -> TrackerResult<User> {
        let user = self.find(identifier)?;
        self.store.users.set_current(&user)?;
        Ok(user)
    }

    /// Resolve a profile by email or id string
    pub fn find(&self, identifier: &str) -> TrackerResult<User> {
        if let Some(user) = self.store.users.find_by_email(identifier)? {
            return Ok(user);
        }

        if let Ok(id) = identifier.parse::<UserId>() {
            if let Some(user) = self.store.users.get(id)? {
                return Ok(user);
            }
        }

        Err(TrackerError::profile_not_found(identifier))
    }

    /// The active profile, or an error telling the user to create one
    pub fn current(&self) -> TrackerResult<User> {
        self.store.users.current()?.ok_or_else(|| {
            TrackerError::Config(
                "No active profile. Run 'fintrack profile create' first.".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sets_current() {
        let store = Store::in_memory();
        let service = ProfileService::new(&store);

        let ada = service.create("ada@example.com", "Ada Lovelace").unwrap();
        assert_eq!(service.current().unwrap(), ada);
    }

    #[test]
    fn test_create_rejects_invalid_email() {
        let store = Store::in_memory();
        let service = ProfileService::new(&store);

        let err = service.create("not-an-email", "Ada Lovelace").unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_switch_by_email_and_id() {
        let store = Store::in_memory();
        let service = ProfileService::new(&store);

        let ada = service.create("ada@example.com", "Ada Lovelace").unwrap();
        let grace = service.create("grace@example.com", "Grace Hopper").unwrap();
        assert_eq!(service.current().unwrap(), grace);

        service.switch("ada@example.com").unwrap();
        assert_eq!(service.current().unwrap(), ada);

        service.switch(&grace.id.as_uuid().to_string()).unwrap();
        assert_eq!(service.current().unwrap(), grace);
    }

    #[test]
    fn test_switch_unknown_is_not_found() {
        let store = Store::in_memory();
        let service = ProfileService::new(&store);

        let err = service.switch("nobody@example.com").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_no_current_profile_is_config_error() {
        let store = Store::in_memory();
        let service = ProfileService::new(&store);

        let err = service.current().unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}

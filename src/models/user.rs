//! User profile model
//!
//! A profile owns its own expense and task lists. There is no credential
//! handling; profiles are a local namespace, not an identity system.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A local user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Contact email address
    pub email: String,

    /// Display name
    pub name: String,
}

impl User {
    /// Create a new profile with a generated id
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Validate the profile fields
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }

        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if self.name.chars().count() < 2 {
            return Err(UserValidationError::NameTooShort);
        }
        if !self.name.chars().all(|c| c.is_alphabetic() || c == ' ') {
            return Err(UserValidationError::InvalidName(self.name.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Structural email check: one '@' with a dotted domain, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validation errors for profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyEmail,
    InvalidEmail(String),
    EmptyName,
    NameTooShort,
    InvalidName(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email is required"),
            Self::InvalidEmail(email) => {
                write!(f, "'{}' is not a valid email address", email)
            }
            Self::EmptyName => write!(f, "Name is required"),
            Self::NameTooShort => write!(f, "Name must be at least 2 characters long"),
            Self::InvalidName(_) => write!(f, "Name can only contain letters and spaces"),
        }
    }
}

impl std::error::Error for UserValidationError {}

//! User Entity
//!
//! Registered customer account. The password hash lives on the entity but
//! is never serialized outward; see `UserResponse` for the public shape.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{Email, PersonName};
use kernel::id::UserId;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Login identifier (unique, lowercased)
    pub email: Email,
    /// Argon2id PHC string
    pub password: HashedPassword,
    pub created_at: DateTime<Utc>,
}

/// A user about to be inserted; the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub password: HashedPassword,
}

impl NewUser {
    /// Attach store-assigned fields
    pub fn into_user(self, id: UserId, created_at: DateTime<Utc>) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            created_at,
        }
    }
}

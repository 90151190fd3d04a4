//! In-Memory Repository Implementation
//!
//! Backs tests and database-less local runs. Ids are assigned from a
//! counter starting at 1, like a `BIGSERIAL` column.

use std::sync::Mutex;

use chrono::Utc;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

#[derive(Default)]
struct UserTable {
    next_id: i64,
    rows: Vec<User>,
}

/// In-memory user repository
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an already-built user (keeps its id)
    pub fn insert(&self, user: User) -> AuthResult<()> {
        let mut table = self.lock()?;
        table.next_id = table.next_id.max(user.id.value());
        table.rows.retain(|u| u.id != user.id);
        table.rows.push(user);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AuthResult<std::sync::MutexGuard<'_, UserTable>> {
        self.table
            .lock()
            .map_err(|_| AuthError::Internal("user table lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut table = self.lock()?;

        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken(user.email.into_inner()));
        }

        table.next_id += 1;
        let user = user.into_user(UserId::new(table.next_id), Utc::now());
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|u| &u.email == email).cloned())
    }
}

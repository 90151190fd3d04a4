//! Register Use Case
//!
//! Creates a new customer account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, PersonName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let first_name = PersonName::new(input.first_name, "firstName")?;
        let last_name = PersonName::new(input.last_name, "lastName")?;
        let email = Email::new(input.email)?;

        // Fast path; the unique index still catches a concurrent duplicate
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken(email.into_inner()));
        }

        let password = ClearTextPassword::new(input.password)?;
        let password = password.hash(self.config.pepper())?;

        let user = self
            .user_repo
            .create(NewUser {
                first_name,
                last_name,
                email,
                password,
            })
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered");

        Ok(user)
    }
}

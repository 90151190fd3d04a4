//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, PersonName};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let result = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO users (
                first_name,
                last_name,
                email,
                password_hash
            ) VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
            "#,
        )
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .fetch_one(&self.pool)
        .await;

        let (id, created_at) = match result {
            Ok(row) => row,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(AuthError::EmailTaken(user.email.into_inner()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(user_id = id, "Inserted user");

        Ok(user.into_user(UserId::new(id), created_at))
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash for user {}: {}", self.id, e)))?;

        Ok(User {
            id: UserId::new(self.id),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            email: Email::from_db(self.email),
            password,
            created_at: self.created_at,
        })
    }
}

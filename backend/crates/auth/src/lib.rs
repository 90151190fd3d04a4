//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository traits
//! - `application/` - Token service and use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, JWT middleware
//!
//! ## Features
//! - User registration and login (email + password)
//! - Stateless HS256 session tokens carrying `userId` / `expiredAt`
//! - Middleware guarding protected routes of other crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Only HMAC-family token algorithms are accepted
//! - Every authentication failure is answered with the same 403;
//!   the actual cause is only logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{SessionClaims, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{
    AuthenticatedUser, JwtAuthState, require_jwt, user_id_from_extensions,
};
pub use presentation::handlers::AuthAppState;
pub use presentation::router::{auth_router, auth_router_generic};

pub use kernel::id::UserId;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryUserRepository as MemoryUserStore;
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;

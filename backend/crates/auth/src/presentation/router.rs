//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: Arc<PgUserRepository>, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<U>(repo: Arc<U>, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);

    Router::new()
        .route("/register", post(handlers::register::<U>))
        .route("/login", post(handlers::login::<U>))
        .with_state(state)
}

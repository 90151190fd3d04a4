//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::presentation::middleware::JwtAuthState;

/// Shared state for auth handlers
pub struct AuthAppState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<U> AuthAppState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            users,
            tokens: Arc::new(TokenService::new(config.clone())),
            config,
        }
    }

    /// State for the JWT middleware sharing this user store and token service
    pub fn jwt_state(&self) -> JwtAuthState<U> {
        JwtAuthState::new(self.users.clone(), self.tokens.clone())
    }
}

impl<U> Clone for AuthAppState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/v1/register
pub async fn register<U>(
    State(state): State<AuthAppState<U>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<StatusCode>
where
    U: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.users.clone(), state.config.clone());

    let input = RegisterInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::CREATED)
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/v1/login
pub async fn login<U>(
    State(state): State<AuthAppState<U>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    U: UserRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.users.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}

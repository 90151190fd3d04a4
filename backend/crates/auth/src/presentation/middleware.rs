//! JWT Middleware
//!
//! Guards protected routes: the raw `Authorization` header is validated,
//! the user id in the claims is resolved against the user store, and the
//! result is bound to the request as [`AuthenticatedUser`].
//!
//! Every failure answers `403 permission denied`; the cause is only logged.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{Extensions, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::error::app_error::AppError;
use kernel::id::UserId;
use platform::client::{extract_authorization, extract_client_ip};

use crate::application::AuthenticateUseCase;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;

/// Middleware state
pub struct JwtAuthState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub tokens: Arc<TokenService>,
}

impl<U> JwtAuthState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }
}

impl<U> Clone for JwtAuthState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

/// Identity bound to a request that passed [`require_jwt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid token for an existing user
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_jwt<U>(
    State(state): State<JwtAuthState<U>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    U: UserRepository + Send + Sync + 'static,
{
    let token = extract_authorization(req.headers());

    let use_case = AuthenticateUseCase::new(state.users.clone(), state.tokens.clone());

    let user = match use_case.execute(&token).await {
        Ok(user) => user,
        Err(e) => {
            let direct_ip = req
                .extensions()
                .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
                .map(|info| info.0.ip());
            let client_ip = extract_client_ip(req.headers(), direct_ip);

            tracing::warn!(
                error = %e,
                client_ip = ?client_ip,
                method = %req.method(),
                path = %req.uri().path(),
                "Rejected request to protected route"
            );
            return Err(AppError::permission_denied().into_response());
        }
    };

    tracing::debug!(user_id = %user.id, "Request authenticated");

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id: user.id });

    Ok(next.run(req).await)
}

/// Read the authenticated user id bound by [`require_jwt`]
///
/// `None` when the request did not pass through the middleware.
pub fn user_id_from_extensions(extensions: &Extensions) -> Option<UserId> {
    extensions.get::<AuthenticatedUser>().map(|u| u.user_id)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match user_id_from_extensions(&parts.extensions) {
            Some(user_id) => Ok(AuthenticatedUser { user_id }),
            None => {
                tracing::warn!(path = %parts.uri.path(), "Handler reached without authenticated user");
                Err(AppError::permission_denied())
            }
        }
    }
}

//! Session Token Service
//!
//! Stateless HMAC-signed tokens. Claims carry the user id as a decimal
//! string and an absolute expiry in unix seconds:
//!
//! ```json
//! { "userId": "42", "expiredAt": 1700000000 }
//! ```
//!
//! Expiry is checked against `expiredAt` only; the registered `exp` claim
//! is not used.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Algorithm used for issued tokens
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Algorithms accepted on validation (HMAC family only)
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: String,
    pub expired_at: i64,
}

impl SessionClaims {
    /// Decode the user id carried by the token
    pub fn user_id(&self) -> AuthResult<UserId> {
        self.user_id.parse().map_err(|_| AuthError::InvalidToken)
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expired_at
    }
}

/// Issue a token for `user_id` that expires `ttl` from now
pub fn issue_token(secret: &[u8], user_id: UserId, ttl: Duration) -> AuthResult<String> {
    issue_token_at(secret, user_id, ttl, Utc::now().timestamp())
}

pub(crate) fn issue_token_at(
    secret: &[u8],
    user_id: UserId,
    ttl: Duration,
    now: i64,
) -> AuthResult<String> {
    if secret.is_empty() {
        return Err(AuthError::Signing("empty secret".to_string()));
    }

    let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
    let claims = SessionClaims {
        user_id: user_id.to_string(),
        expired_at: now.saturating_add(ttl_secs),
    };

    jsonwebtoken::encode(
        &Header::new(SIGNING_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Validate a token and return its claims
pub fn validate_token(token: &str, secret: &[u8]) -> AuthResult<SessionClaims> {
    validate_token_at(token, secret, Utc::now().timestamp())
}

pub(crate) fn validate_token_at(token: &str, secret: &[u8], now: i64) -> AuthResult<SessionClaims> {
    if token.is_empty() || secret.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_aud = false;

    let data =
        jsonwebtoken::decode::<SessionClaims>(token, &DecodingKey::from_secret(secret), &validation)?;

    if data.claims.is_expired_at(now) {
        return Err(AuthError::ExpiredToken);
    }

    Ok(data.claims)
}

/// Token service bound to an injected [`AuthConfig`]
#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn issue(&self, user_id: UserId) -> AuthResult<String> {
        issue_token(&self.config.jwt_secret, user_id, self.config.jwt_ttl)
    }

    pub fn validate(&self, token: &str) -> AuthResult<SessionClaims> {
        validate_token(token, &self.config.jwt_secret)
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

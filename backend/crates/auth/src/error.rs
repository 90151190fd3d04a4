//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token is malformed, uses a non-HMAC algorithm, or carries bad claims
    #[error("Invalid token")]
    InvalidToken,

    /// Token signature does not match the configured secret
    #[error("Token signature mismatch")]
    SignatureMismatch,

    /// Token `expiredAt` is in the past
    #[error("Token expired")]
    ExpiredToken,

    /// Token could not be signed
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Email already registered
    #[error("User with email {0} already exists")]
    EmailTaken(String),

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidToken | AuthError::SignatureMismatch | AuthError::ExpiredToken => {
                StatusCode::FORBIDDEN
            }
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken(_) => StatusCode::CONFLICT,
            AuthError::Signing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidToken | AuthError::SignatureMismatch | AuthError::ExpiredToken => {
                ErrorKind::Forbidden
            }
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken(_) => ErrorKind::Conflict,
            AuthError::Signing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Whether this error means the caller failed authentication
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken
                | AuthError::SignatureMismatch
                | AuthError::ExpiredToken
                | AuthError::UserNotFound
        )
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Store details stay in the logs
            AuthError::Signing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Signing(msg) => {
                tracing::error!(message = %msg, "Token signing failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::SignatureMismatch => {
                tracing::warn!("Token signature mismatch");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind as JwtErrorKind;

        match err.kind() {
            JwtErrorKind::InvalidSignature => AuthError::SignatureMismatch,
            JwtErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        }
    }
}

//! Product Error Types
//!
//! Integrates with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::ProductId;
use thiserror::Error;

/// Product-specific result type alias
pub type ProductResult<T> = Result<T, ProductError>;

/// Product-specific error variants
#[derive(Debug, Error)]
pub enum ProductError {
    /// No product with this id
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// Another product already uses this name
    #[error("Product with name {0} already exists")]
    NameTaken(String),

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

impl ProductError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::NameTaken(_) => StatusCode::CONFLICT,
            ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::Database(_) | ProductError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::NotFound(_) => ErrorKind::NotFound,
            ProductError::NameTaken(_) => ErrorKind::Conflict,
            ProductError::Validation(_) => ErrorKind::BadRequest,
            ProductError::Database(_) | ProductError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProductError::Database(_) | ProductError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            ProductError::Database(e) => {
                tracing::error!(error = %e, "Product database error");
            }
            ProductError::Internal(msg) => {
                tracing::error!(message = %msg, "Product internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Product error");
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ProductError {
    fn from(err: AppError) -> Self {
        ProductError::Internal(err.to_string())
    }
}

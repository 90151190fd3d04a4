//! Cart Error Types
//!
//! Integrates with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::ProductId;
use product::ProductError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Cart-specific result type alias
pub type CartResult<T> = Result<T, CartError>;

/// Cart-specific error variants
#[derive(Debug, Error)]
pub enum CartError {
    /// Request body could not be decoded
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Line item quantity is zero or negative
    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: ProductId, quantity: i32 },

    /// Cart has no line items
    #[error("Cart is empty")]
    EmptyCart,

    /// Product does not exist
    #[error("Product {0} is not available")]
    ProductUnavailable(ProductId),

    /// Requested more units than in stock
    #[error("Product {product_id} is not available in the quantity requested ({requested} requested, {available} in stock)")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i32,
    },

    /// Order total does not fit the stored order
    #[error("Order total must be below {limit}")]
    TotalTooLarge { limit: Decimal },

    /// Order or order item could not be stored
    #[error("Failed to store order: {0}")]
    OrderPersistence(String),

    /// Product store failure
    #[error(transparent)]
    Product(#[from] ProductError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CartError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CartError::InvalidPayload(_)
            | CartError::InvalidQuantity { .. }
            | CartError::EmptyCart
            | CartError::ProductUnavailable(_)
            | CartError::InsufficientStock { .. }
            | CartError::TotalTooLarge { .. } => StatusCode::BAD_REQUEST,
            CartError::OrderPersistence(_)
            | CartError::Product(_)
            | CartError::Database(_)
            | CartError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::InvalidPayload(_)
            | CartError::InvalidQuantity { .. }
            | CartError::EmptyCart
            | CartError::ProductUnavailable(_)
            | CartError::InsufficientStock { .. }
            | CartError::TotalTooLarge { .. } => ErrorKind::BadRequest,
            CartError::OrderPersistence(_)
            | CartError::Product(_)
            | CartError::Database(_)
            | CartError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// What the client can do to get the checkout through
    fn action(&self) -> Option<&'static str> {
        match self {
            CartError::EmptyCart => Some("Add at least one product to the cart"),
            CartError::ProductUnavailable(_) => Some("Remove the product from the cart"),
            CartError::InsufficientStock { .. } => {
                Some("Lower the quantity or remove the product from the cart")
            }
            CartError::TotalTooLarge { .. } => Some("Split the cart into several orders"),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal server error"),
            kind => AppError::new(kind, self.to_string()),
        };
        match self.action() {
            Some(action) => err.with_action(action),
            None => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CartError::Database(e) => {
                tracing::error!(error = %e, "Cart database error");
            }
            CartError::Product(e) => {
                tracing::error!(error = %e, "Product store failed during checkout");
            }
            CartError::OrderPersistence(msg) => {
                tracing::error!(message = %msg, "Order persistence failed");
            }
            CartError::Internal(msg) => {
                tracing::error!(message = %msg, "Cart internal error");
            }
            CartError::InsufficientStock {
                product_id,
                requested,
                available,
            } => {
                tracing::info!(%product_id, requested, available, "Checkout rejected: insufficient stock");
            }
            _ => {
                tracing::debug!(error = %self, "Cart error");
            }
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CartError {
    fn from(err: AppError) -> Self {
        CartError::Internal(err.to_string())
    }
}

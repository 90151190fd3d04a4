//! Cart (Checkout) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Orders, cart items, stock and pricing rules
//! - `application/` - Checkout use case
//! - `infra/` - PostgreSQL and in-memory order repositories
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Checkout Model
//! - Stock is checked for the whole cart before anything is written
//! - Totals use exact decimal arithmetic on the prices read at checkout
//! - Stock is taken with conditional decrements, so concurrent checkouts
//!   cannot sell more than is in stock
//! - Units taken by a checkout that fails before its order is stored are
//!   put back

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::checkout::{CheckoutInput, CheckoutOutput, CheckoutUseCase};
pub use application::config::CheckoutConfig;
pub use domain::repository::OrderRepository;
pub use error::{CartError, CartResult};
pub use infra::memory::InMemoryOrderRepository;
pub use infra::postgres::PgOrderRepository;
pub use presentation::router::{cart_router, cart_router_generic};

pub use kernel::id::{OrderId, OrderItemId};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

//! Product Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity, repository trait
//! - `application/` - Listing and creation use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Listing and lookup are public; creating a product requires a session
//! token (see `auth::require_jwt`). The checkout flow in the `cart` crate
//! reads and updates stock through [`ProductRepository`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{NewProduct, Product};
pub use domain::repository::ProductRepository;
pub use error::{ProductError, ProductResult};
pub use infra::memory::InMemoryProductRepository;
pub use infra::postgres::PgProductRepository;
pub use presentation::router::{product_router, product_router_generic};

pub use kernel::id::ProductId;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;

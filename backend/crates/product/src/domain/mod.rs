//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entities;
pub mod repository;

// Re-exports
pub use entities::{NewProduct, Product};
pub use repository::ProductRepository;

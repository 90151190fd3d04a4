//! Domain Layer
//!
//! Contains entities, value objects, domain services, and repository traits.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::{NewOrder, NewOrderItem, Order, OrderItem};
pub use repository::OrderRepository;
pub use value_objects::{CartItem, OrderStatus};

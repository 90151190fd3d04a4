//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryOrderRepository;
pub use postgres::PgOrderRepository;

//! Application Layer
//!
//! Use cases.

pub mod create_product;
pub mod get_products;

// Re-exports
pub use create_product::CreateProductUseCase;
pub use get_products::GetProductsUseCase;

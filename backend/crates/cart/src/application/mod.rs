//! Application Layer
//!
//! Use cases and application configuration.

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::{CheckoutInput, CheckoutOutput, CheckoutUseCase};
pub use config::CheckoutConfig;

//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{SessionClaims, TokenService, issue_token, validate_token};

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Request header helpers (`Authorization`, client IP)

pub mod client;
pub mod password;

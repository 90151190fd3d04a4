//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). Startup fails on malformed values instead of silently using a
//! default.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use cart::CheckoutConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub checkout: CheckoutConfig,
}

impl ServerConfig {
    /// Load from environment variables
    ///
    /// Debug builds fall back to a random JWT secret when `JWT_SECRET` is
    /// unset; release builds require it.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    fn from_lookup<F>(lookup: F, allow_random_secret: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let mut auth = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => AuthConfig::new(secret.into_bytes(), auth::application::config::DEFAULT_JWT_TTL),
            None if allow_random_secret => {
                tracing::warn!("JWT_SECRET not set, using a random secret; tokens will not survive a restart");
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };

        if let Some(raw) = lookup("JWT_EXPIRATION_IN_SECONDS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .context("JWT_EXPIRATION_IN_SECONDS must be a positive integer")?;
            auth.jwt_ttl = Duration::from_secs(secs);
        }

        auth.password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let checkout = match lookup("DEFAULT_SHIPPING_ADDRESS").filter(|a| !a.trim().is_empty()) {
            Some(address) => CheckoutConfig::new(address),
            None => CheckoutConfig::default(),
        };

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            frontend_origins,
            auth,
            checkout,
        })
    }
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Default token lifetime (7 days)
pub const DEFAULT_JWT_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify session tokens
    pub jwt_secret: Vec<u8>,
    /// Lifetime of an issued token
    pub jwt_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            jwt_ttl: DEFAULT_JWT_TTL,
            password_pepper: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_ttl", &self.jwt_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AuthConfig {
    /// Create config with an explicit secret and lifetime
    pub fn new(jwt_secret: impl Into<Vec<u8>>, jwt_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            jwt_ttl,
            ..Default::default()
        }
    }

    /// Create config with a random 32-byte secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            jwt_secret: secret.to_vec(),
            ..Default::default()
        }
    }

    /// Create config for development (random secret, lost on restart)
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

//! Application Configuration
//!
//! Configuration for the Cart application layer.

/// Address used when a checkout request does not carry one
pub const DEFAULT_SHIPPING_ADDRESS: &str = "some address";

/// Cart application configuration
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Fallback shipping address
    pub default_address: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            default_address: DEFAULT_SHIPPING_ADDRESS.to_string(),
        }
    }
}

impl CheckoutConfig {
    pub fn new(default_address: impl Into<String>) -> Self {
        Self {
            default_address: default_address.into(),
        }
    }

    /// Pick the requested address, or the default when blank or absent
    pub fn resolve_address(&self, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(self.default_address.as_str())
            .to_string()
    }
}

//! Client request utilities
//!
//! Header helpers shared by the auth middleware and request logging.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Optional scheme accepted in front of the raw token
const BEARER_PREFIX: &str = "Bearer ";

/// Extract the raw token from the `Authorization` header
///
/// Returns an empty string when the header is absent or not valid ASCII;
/// rejecting the empty token is left to token validation.
/// A leading `Bearer ` scheme is stripped if present, otherwise the header
/// value is returned as-is.
///
/// ## Arguments
/// * `headers` - HTTP request headers
pub fn extract_authorization(headers: &HeaderMap) -> String {
    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .trim();

    raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim().to_string()
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}

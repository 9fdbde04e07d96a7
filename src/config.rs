//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;

use crate::policy::Allowlist;

/// Default upstream endpoint of the Website Carbon API.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.websitecarbon.com/site";

/// Default freshness window: 24 hours.
pub const DEFAULT_CACHE_TTL: u64 = 60 * 60 * 24;

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Upstream carbon estimation endpoint
    pub upstream_url: String,
    /// Cache freshness window in seconds
    pub cache_ttl: u64,
    /// Hostname policy for target URLs
    pub allowlist: Allowlist,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_URL` - Upstream endpoint (default: Website Carbon `/site`)
    /// - `CACHE_TTL` - Cache freshness in seconds (default: 86400)
    /// - `ALLOWED_DOMAINS` - Comma-separated hostnames (default: unset, all allowed)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            upstream_url: env::var("UPSTREAM_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL),
            allowlist: env::var("ALLOWED_DOMAINS")
                .map(|v| Allowlist::from_csv(&v))
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            allowlist: Allowlist::Disabled,
        }
    }
}

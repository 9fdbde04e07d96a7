//! Upstream Module
//!
//! The carbon estimation API the proxy forwards cache misses to.

mod website_carbon;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use website_carbon::WebsiteCarbonClient;

/// A source of carbon estimates for a website.
#[async_trait]
pub trait CarbonApi: Send + Sync {
    /// Fetches the estimate for `target`, exactly once, with no retries.
    ///
    /// # Errors
    /// - `ProxyError::Upstream` for a non-success status or a body that is not JSON
    /// - `ProxyError::Internal` for transport failures
    async fn site(&self, target: &str) -> Result<Value>;
}

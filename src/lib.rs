//! Carbon Proxy - A caching proxy for the Website Carbon API
//!
//! Forwards `GET /api/carbon?url=<target>` to the upstream estimation API,
//! caches successful results for a fixed TTL and optionally restricts
//! targets to an allowlist of hostnames.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod upstream;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ProxyError, Result};

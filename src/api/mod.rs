//! API Module
//!
//! HTTP handlers and routing for the carbon proxy.
//!
//! # Endpoints
//! - `GET /api/carbon?url=<target>` - Proxied, cached carbon estimate
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

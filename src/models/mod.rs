//! Request and Response models for the carbon proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! parsing query parameters and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CarbonQuery, MISSING_URL_MESSAGE};
pub use responses::{
    CarbonResponse, ErrorResponse, HealthResponse, StatsResponse, UpstreamErrorResponse,
};

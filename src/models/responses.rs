//! Response DTOs for the carbon proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::{Map, Value};

/// Response body for `GET /api/carbon`
///
/// A flat object: the `cached` flag followed by the upstream payload's
/// fields. Payload fields win on key collisions, `cached` included.
/// Array payloads contribute their elements under index keys; scalar
/// payloads contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CarbonResponse(Map<String, Value>);

impl CarbonResponse {
    pub fn new(cached: bool, payload: &Value) -> Self {
        let mut fields = Map::new();
        fields.insert("cached".to_string(), Value::Bool(cached));

        match payload {
            Value::Object(object) => {
                for (key, value) in object {
                    fields.insert(key.clone(), value.clone());
                }
            }
            Value::Array(items) => {
                for (index, value) in items.iter().enumerate() {
                    fields.insert(index.to_string(), value.clone());
                }
            }
            _ => {}
        }

        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Requests answered from a fresh cache entry
    pub hits: u64,
    /// Requests that went upstream
    pub misses: u64,
    /// Upstream calls that failed with a non-success status or bad body
    pub upstream_errors: u64,
    /// Entries currently stored, stale ones included
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(hits: u64, misses: u64, upstream_errors: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            upstream_errors,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for client, policy and internal failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Error response body when the upstream call fails
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamErrorResponse {
    pub error: String,
    /// Status code the upstream answered with
    pub status: u16,
    /// Upstream response text, empty if it could not be read
    pub body: String,
}

impl UpstreamErrorResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            error: "Upstream error".to_string(),
            status,
            body: body.into(),
        }
    }
}

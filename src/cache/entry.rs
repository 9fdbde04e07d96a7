//! Cache Entry Module
//!
//! A stored upstream result together with the moment it was stored.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

// == Cache Entry ==
/// One successfully parsed upstream payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// Parsed upstream JSON
    pub value: Value,
    /// When the payload was fetched
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(value: Value, stored_at: DateTime<Utc>) -> Self {
        Self { value, stored_at }
    }

    // == Is Fresh ==
    /// Checks whether the entry can still be served at `now`.
    ///
    /// Boundary condition: an entry exactly `ttl` old is stale. An entry
    /// stored in the future (clock moved backwards) counts as age zero.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match now.signed_duration_since(self.stored_at).to_std() {
            Ok(age) => age < ttl,
            Err(_) => true,
        }
    }
}

//! Cache Module
//!
//! Time-bounded storage for upstream carbon results.

mod clock;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::ProxyStats;
pub use store::{MemoryStore, ResultStore};

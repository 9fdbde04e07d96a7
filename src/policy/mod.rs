//! Policy Module
//!
//! Request policies applied before any cache or upstream work.

mod allowlist;


pub use allowlist::{Allowlist, DOMAIN_NOT_ALLOWED_MESSAGE, INVALID_URL_MESSAGE};

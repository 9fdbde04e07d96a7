//! Request DTOs for the carbon proxy API
//!
//! Defines the structure of incoming query parameters.

use crate::error::{ProxyError, Result};

pub const MISSING_URL_MESSAGE: &str = "Missing url parameter";

/// Query parameters of `GET /api/carbon`
///
/// Built from raw key/value pairs so that malformed or repeated parameters
/// never reject the request on their own. The first `url` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarbonQuery {
    /// The target website, verbatim
    pub url: Option<String>,
}

impl CarbonQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            url: pairs
                .into_iter()
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value),
        }
    }

    /// Returns the target URL, rejecting a missing or empty parameter.
    pub fn target(&self) -> Result<&str> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ProxyError::BadRequest(MISSING_URL_MESSAGE.to_string())),
        }
    }
}

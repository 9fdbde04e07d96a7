//! Error types for the carbon proxy
//!
//! Every failure the handler can produce maps onto one of four variants,
//! each with a fixed HTTP status and JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::{ErrorResponse, UpstreamErrorResponse};

/// Body returned for every internal failure. The detail only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// == Proxy Error Enum ==
/// Unified error type for the carbon proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Malformed client input (missing or unparsable `url`)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Target hostname rejected by the allowlist
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Upstream answered with a non-success status or an undecodable body
    #[error("Upstream error: status {status}")]
    Upstream { status: u16, body: String },

    /// Anything unanticipated (transport failures, panics)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Forbidden(_) => StatusCode::FORBIDDEN,
            ProxyError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Internal(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ProxyError::BadRequest(msg) | ProxyError::Forbidden(msg) => {
                (status, Json(ErrorResponse::new(msg))).into_response()
            }
            ProxyError::Upstream {
                status: upstream_status,
                body,
            } => (status, Json(UpstreamErrorResponse::new(upstream_status, body))).into_response(),
            ProxyError::Internal(detail) => {
                error!("Proxy error: {}", detail);
                (status, Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE))).into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the carbon proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;

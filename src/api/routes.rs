//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{carbon_handler, health_handler, stats_handler, AppState};
use crate::error::ProxyError;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/carbon?url=<target>` - Carbon estimate for a website
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, the proxy is called from browsers
/// - Tracing: Logs all requests
/// - Panic catching: Panics become a generic 500 JSON body
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/carbon", get(carbon_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    with_middleware(router)
}

fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ProxyError::Internal(format!("handler panicked: {}", detail)).into_response()
}

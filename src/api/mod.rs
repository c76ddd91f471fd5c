//! API module
//!
//! HTTP API endpoints, middleware and the assembled application router.

pub mod middleware;
pub mod routes;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub use routes::create_router;

/// Build the application router
pub fn build_app(config: &Config) -> Router {
    // Axum layers are applied in reverse order (last added = first executed)
    // Order: request id -> trace -> cors -> context -> logging -> handler
    let api_router = create_router()
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(axum::middleware::from_fn(middleware::context_middleware));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/api/v1", api_router)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// CORS for the dashboard origin. Without a configured origin, any origin
/// is allowed in development and none in production.
fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(middleware::CORRELATION_ID_HEADER),
        ]);

    let origin = config
        .cors_allowed_origin
        .as_deref()
        .and_then(|origin| HeaderValue::from_str(origin).ok());

    match origin {
        Some(origin) => layer.allow_origin(origin),
        None if config.is_production() => layer,
        None => layer.allow_origin(Any),
    }
}

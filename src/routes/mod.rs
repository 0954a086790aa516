//! HTTP route handlers.
//!
//! Routing is a flat table: `/healthz` goes to the liveness probe and
//! everything else, `/` included, goes to the greeting. Every route accepts
//! any method.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/healthz", any(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    let home_routes = Router::new()
        .route("/", any(home::index))
        .fallback(home::index);

    Router::new()
        .merge(health_routes)
        .merge(home_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

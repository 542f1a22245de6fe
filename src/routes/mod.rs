//! HTTP routes for Genrelay
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod generate;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    routing::{any, get, MethodRouter},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{proxy::headers::cors_headers, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Operational routes
    let public_routes = Router::new()
        .route("/health", operational(health::health_check))
        .route("/health/ready", operational(health::readiness_check))
        .route("/health/live", operational(health::liveness_check))
        .route("/metrics", operational(metrics::prometheus_metrics));

    // Every other path and method lands on the relay handler, which does its
    // own method gating
    let router = Router::new()
        .merge(public_routes)
        .route("/api/generate", any(generate::generate))
        .fallback(generate::generate)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes));

    // CORS headers go on every response, pre-flight and errors included.
    // tower-http's CorsLayer refuses credentials with a wildcard origin.
    let router = cors_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        });

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// GET route whose other methods (pre-flight included) go to the relay handler
/// instead of axum's bare 405
fn operational<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    get(handler).fallback(generate::generate)
}

//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /`             - HTML report page
//! - `GET /health`       - Health check: count data, board directory, cache
//! - `/api/*`            - JSON report endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with state and request tracing, without rate limiting.
///
/// Rate limiting keys on the peer address, which in-process test servers
/// do not provide; tests mount this router directly.
pub fn base_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `per_second` / `burst` - per-IP rate limit applied to every route
pub fn app_router(state: AppState, per_second: u64, burst: u32) -> NormalizePath<Router> {
    let router = base_router(state).layer(rate_limit::layer(per_second, burst));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

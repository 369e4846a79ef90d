//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`  - Create a short link
//! - `GET  /health`   - Health check
//! - `GET  /{code}`   - Short link redirect
//!
//! Any other path answers 404 with the JSON error envelope.
//!
//! # Middleware
//!
//! - **CORS** - Origin allow-list for the browser frontend
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    fallback_handler, health_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Path segments served by fixed routes.
///
/// A generated code equal to one of these would be shadowed by the route,
/// so the registry is told never to hand them out.
pub const RESERVED_CODES: &[&str] = &["health", "shorten"];

/// Returns [`RESERVED_CODES`] in the form [`crate::domain::RegistrySettings`] expects.
pub fn reserved_codes() -> Vec<String> {
    RESERVED_CODES.iter().map(|code| code.to_string()).collect()
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - origins admitted by the CORS policy
pub fn app_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer())
}

/// Wraps [`app_router`] so that `/abc123/` is routed like `/abc123`.
pub fn app(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state, allowed_origins))
}

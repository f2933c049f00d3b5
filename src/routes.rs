//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check: database (public)
//! - `/api/*`       - REST API; profile and adoption routes need a Bearer token
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, or the configured allow-list
//! - **Authentication** - Bearer token on protected API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware except path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed origins; empty allows any origin
/// - `max_upload_bytes` - body limit for the multipart pet upload
pub fn build_router(state: AppState, cors_origins: &[String], max_upload_bytes: usize) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = api::routes::public_routes(max_upload_bytes).merge(protected);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(
    state: AppState,
    cors_origins: &[String],
    max_upload_bytes: usize,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(
        state,
        cors_origins,
        max_upload_bytes,
    ))
}

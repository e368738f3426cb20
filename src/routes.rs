//! Router configuration for both services.
//!
//! # Shortener Routes
//!
//! - `GET  /`            - Service info (public)
//! - `POST /api/shorten` - Create a short link
//! - `GET  /api/urls`    - Snapshot of all stored links
//! - `GET  /{code}`      - Short link redirect
//!
//! # Encyclopedia Routes
//!
//! - `GET /health`           - Health check
//! - `GET /techniques`       - Filterable technique list
//! - `GET /techniques/{id}`  - Technique detail with relationships
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, list_techniques_handler, list_urls_handler, redirect_handler,
    service_info_handler, shorten_handler, technique_detail_handler,
};
use crate::api::middleware::tracing;
use crate::state::{EncyclopediaState, ShortenerState};
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the shortener router with all routes and middleware.
///
/// The catch-all `/{code}` redirect route sits at the root level; the exact
/// `/` and `/api/*` routes take precedence over it.
pub fn shortener_router(state: ShortenerState) -> NormalizePath<Router> {
    let api_router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler));

    let router = Router::new()
        .route("/", get(service_info_handler))
        .nest("/api", api_router)
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the encyclopedia router with all routes and middleware.
pub fn encyclopedia_router(state: EncyclopediaState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/techniques", get(list_techniques_handler))
        .route("/techniques/{id}", get(technique_detail_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

//! Handlers for health/info endpoints.

use axum::Json;

use crate::api::dto::health::{HealthResponse, ServiceInfo};

/// Returns service identification for the shortener.
///
/// # Endpoint
///
/// `GET /`
pub async fn service_info_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "ok",
        message: "URL Shortener API",
    })
}

/// Returns liveness status for the encyclopedia.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

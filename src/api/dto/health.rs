//! DTOs for the health/info endpoints.

use serde::Serialize;

/// Root endpoint response of the shortener.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check response of the encyclopedia.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

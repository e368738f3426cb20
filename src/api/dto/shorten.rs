//! DTOs for the shortener endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A single shortened URL as returned by the API.
///
/// `short_url` is either an absolute URL (when a public base URL is
/// configured) or the relative redirect path.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub original_url: String,
    pub short_url: String,
}

/// Snapshot of every stored link.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<ShortenResponse>,
}

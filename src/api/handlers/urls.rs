//! Handler for the stored URL listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenResponse, UrlListResponse};
use crate::state::ShortenerState;

/// Lists every stored short link.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// ```json
/// {
///   "urls": [
///     {
///       "short_code": "aZ3kQ9",
///       "original_url": "https://example.com/",
///       "short_url": "/aZ3kQ9"
///     }
///   ]
/// }
/// ```
///
/// The listing is a point-in-time snapshot; entry order is unspecified.
pub async fn list_urls_handler(State(state): State<ShortenerState>) -> Json<UrlListResponse> {
    let urls = state
        .shortener_service
        .list_urls()
        .into_iter()
        .map(|link| {
            let short_url = state.shortener_service.short_url(&link.code);
            ShortenResponse {
                short_code: link.code,
                original_url: link.target_url,
                short_url,
            }
        })
        .collect();

    Json(UrlListResponse { urls })
}

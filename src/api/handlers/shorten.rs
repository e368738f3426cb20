//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::ShortenerState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "aZ3kQ9",
///   "original_url": "https://example.com/very/long/url",
///   "short_url": "/aZ3kQ9"
/// }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if `url` is not a well-formed HTTP(S) URL.
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.shortener_service.create_short_url(&payload.url)?;
    let short_url = state.shortener_service.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.code,
            original_url: link.target_url,
            short_url,
        }),
    ))
}

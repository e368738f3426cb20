//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::ShortenerState;

/// Redirects a short code to its stored URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<ShortenerState>,
) -> Result<Redirect, AppError> {
    match state.shortener_service.get_original_url(&code) {
        Some(url) => Ok(Redirect::temporary(&url)),
        None => Err(AppError::not_found(
            "Short URL not found",
            json!({ "code": code }),
        )),
    }
}

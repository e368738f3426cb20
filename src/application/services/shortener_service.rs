//! Short link creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Upper bound on code redraws before allocation fails with a capacity error.
///
/// The probabilistic generate-and-check loop must terminate even under
/// adversarial fill ratios, so collisions are retried a fixed number of times
/// rather than forever.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened URLs.
///
/// Owns an explicit store handle rather than module-level global state, so
/// tests and future multi-instance deployments can each hold their own store.
pub struct ShortenerService<S: LinkStore> {
    store: Arc<S>,
    code_length: usize,
    public_base_url: Option<String>,
}

impl<S: LinkStore> ShortenerService<S> {
    /// Creates a new shortener service.
    pub fn new(store: Arc<S>, code_length: usize, public_base_url: Option<String>) -> Self {
        Self {
            store,
            code_length,
            public_base_url,
        }
    }

    /// Creates a short link for the given URL.
    ///
    /// The URL is normalized first (scheme whitelist, lowercase host, default
    /// port and fragment stripping); the stored target is the normalized form.
    /// A fresh alphanumeric code of the configured length is drawn until the
    /// store accepts it as unused.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or uses a
    /// non-HTTP(S) scheme.
    ///
    /// Returns [`AppError::Internal`] if no free code is found within
    /// [`MAX_ATTEMPTS`] draws.
    pub fn create_short_url(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let target_url = normalize_url(raw_url).map_err(|e| {
            AppError::validation("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code(self.code_length);

            // insert_if_absent is atomic, so a concurrent allocation of the
            // same candidate cannot slip between the check and the insert.
            if self.store.insert_if_absent(&code, &target_url) {
                return Ok(ShortLink::new(code, target_url));
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS, "code_length": self.code_length }),
        ))
    }

    /// Resolves a short code to its stored URL.
    ///
    /// Unknown codes yield `None`; the HTTP layer maps that to 404.
    pub fn get_original_url(&self, code: &str) -> Option<String> {
        self.store.get(code)
    }

    /// Returns a snapshot of every stored link.
    pub fn list_urls(&self) -> Vec<ShortLink> {
        self.store.snapshot()
    }

    /// Constructs the public short URL for a code.
    ///
    /// Relative (`/{code}`) unless a public base URL is configured.
    pub fn short_url(&self, code: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), code),
            None => format!("/{code}"),
        }
    }
}

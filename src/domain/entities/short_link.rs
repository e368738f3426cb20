//! Short link entity for the URL shortener.

/// A short code to target URL association.
///
/// Short links are ephemeral: created on shorten requests, never updated,
/// never deleted, and lost when the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub target_url: String,
}

impl ShortLink {
    pub fn new(code: String, target_url: String) -> Self {
        Self { code, target_url }
    }
}

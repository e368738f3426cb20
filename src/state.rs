//! Shared application state injected into handlers.
//!
//! Each service owns its state type; the store/repository handles are
//! explicit here rather than process-wide singletons, so tests can build
//! isolated instances.

use std::sync::Arc;

use crate::application::services::{ShortenerService, TechniqueService};
use crate::infrastructure::memory::InMemoryLinkStore;
use crate::infrastructure::persistence::SqliteTechniqueRepository;

/// State of the URL shortener service.
#[derive(Clone)]
pub struct ShortenerState {
    pub shortener_service: Arc<ShortenerService<InMemoryLinkStore>>,
}

/// State of the technique encyclopedia service.
#[derive(Clone)]
pub struct EncyclopediaState {
    pub technique_service: Arc<TechniqueService<SqliteTechniqueRepository>>,
}

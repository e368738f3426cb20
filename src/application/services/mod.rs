//! Business logic services.
//!
//! - [`ShortenerService`] - short code allocation, lookup, and listing
//! - [`TechniqueService`] - technique filtering and relationship resolution

pub mod shortener_service;
pub mod technique_service;

pub use shortener_service::ShortenerService;
pub use technique_service::TechniqueService;

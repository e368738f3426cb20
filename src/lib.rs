//! # dojo-services
//!
//! A pair of small, independent demo backends sharing one library:
//!
//! - **shortener** - an in-memory URL shortening service (nothing persisted,
//!   state lives for the process lifetime)
//! - **encyclopedia** - a read-only BJJ technique encyclopedia backed by a
//!   file-based SQLite database, with directed relationships between techniques
//!
//! ## Architecture
//!
//! Both services follow the same layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and SQLite repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the URL shortener
//! cargo run --bin shortener
//!
//! # Seed and run the technique encyclopedia
//! cargo run --bin seed
//! cargo run --bin encyclopedia
//! ```
//!
//! ## Configuration
//!
//! Both binaries read configuration from environment variables via
//! [`config::Config`]; every variable has a default. See [`config`] for the
//! available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;
pub mod seed;

pub use error::AppError;
pub use state::{EncyclopediaState, ShortenerState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenerService, TechniqueService};
    pub use crate::domain::entities::{ShortLink, Technique, TechniqueFilter, TechniqueSummary};
    pub use crate::error::AppError;
    pub use crate::state::{EncyclopediaState, ShortenerState};
}

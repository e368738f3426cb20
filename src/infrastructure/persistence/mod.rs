//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries against a file-backed SQLite database.
//!
//! # Modules
//!
//! - [`db`] - Pool construction and idempotent schema initialization
//! - [`sqlite_technique_repository`] - Technique storage and graph queries

pub mod db;
pub mod sqlite_technique_repository;

pub use sqlite_technique_repository::SqliteTechniqueRepository;

//! Repository trait for technique data access.

use crate::domain::entities::{
    NewRelationship, NewTechnique, RelatedTechnique, Technique, TechniqueFilter, TechniqueSummary,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for techniques and their relationship graph.
///
/// Reads serve the HTTP API; the insert methods exist solely for the seed
/// binary - the API surface has no mutation path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteTechniqueRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TechniqueRepository: Send + Sync {
    /// Lists technique summaries matching the filter.
    ///
    /// An empty filter returns every technique. Results follow storage order
    /// (ascending id, i.e. insertion order).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: &TechniqueFilter) -> Result<Vec<TechniqueSummary>, AppError>;

    /// Finds a full technique record by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Technique))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Technique>, AppError>;

    /// Edges where the given technique is the source.
    ///
    /// Each entry pairs the relationship type with the neighbor's summary.
    /// Edges whose neighbor row cannot be resolved are dropped, not surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn outgoing(&self, id: i64) -> Result<Vec<RelatedTechnique>, AppError>;

    /// Edges where the given technique is the target (symmetric to
    /// [`Self::outgoing`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn incoming(&self, id: i64) -> Result<Vec<RelatedTechnique>, AppError>;

    /// Inserts a technique and returns its assigned id. Seed path only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_technique: NewTechnique) -> Result<i64, AppError>;

    /// Inserts a directed relationship edge. Seed path only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including foreign
    /// key violations when an endpoint does not reference an existing row.
    async fn insert_relationship(&self, relationship: NewRelationship) -> Result<i64, AppError>;

    /// Counts stored techniques.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}

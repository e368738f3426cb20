//! Technique listing and relationship resolution service.

use std::sync::Arc;

use crate::domain::entities::{TechniqueFilter, TechniqueSummary, TechniqueWithRelations};
use crate::domain::repositories::TechniqueRepository;
use crate::error::AppError;
use serde_json::json;

/// Read service over the technique encyclopedia.
///
/// The API surface is read-only; every write happens through the separate
/// seed path (see [`crate::seed`]).
pub struct TechniqueService<R: TechniqueRepository> {
    repository: Arc<R>,
}

impl<R: TechniqueRepository> TechniqueService<R> {
    /// Creates a new technique service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists technique summaries matching the filter.
    ///
    /// Filters combine with logical AND; an empty filter returns all rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_techniques(
        &self,
        filter: TechniqueFilter,
    ) -> Result<Vec<TechniqueSummary>, AppError> {
        self.repository.list(&filter).await
    }

    /// Fetches a technique's full record with its adjacency lists.
    ///
    /// Issues one lookup plus one query per edge direction. A technique with
    /// no edges resolves to empty lists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_technique(&self, id: i64) -> Result<TechniqueWithRelations, AppError> {
        let technique = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Technique not found", json!({ "id": id })))?;

        let outgoing = self.repository.outgoing(id).await?;
        let incoming = self.repository.incoming(id).await?;

        Ok(TechniqueWithRelations {
            technique,
            outgoing,
            incoming,
        })
    }
}

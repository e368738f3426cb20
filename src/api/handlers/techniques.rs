//! Handlers for the technique encyclopedia endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::technique::{TechniqueDetailResponse, TechniqueItem, TechniqueListQuery};
use crate::error::AppError;
use crate::state::EncyclopediaState;

/// Lists technique summaries, optionally filtered.
///
/// # Endpoint
///
/// `GET /techniques?position=&type=&difficulty=&q=`
///
/// # Filters
///
/// - `position`, `type`, `difficulty` - exact match
/// - `q` - case-insensitive substring match against name or description
///
/// All filters are optional and combine with logical AND; without filters the
/// full catalog is returned. Summaries exclude steps, mistakes, and counters.
pub async fn list_techniques_handler(
    State(state): State<EncyclopediaState>,
    Query(query): Query<TechniqueListQuery>,
) -> Result<Json<Vec<TechniqueItem>>, AppError> {
    let summaries = state
        .technique_service
        .list_techniques(query.into_filter())
        .await?;

    Ok(Json(summaries.into_iter().map(TechniqueItem::from).collect()))
}

/// Returns a technique's full record with its adjacency lists.
///
/// # Endpoint
///
/// `GET /techniques/{id}`
///
/// # Response
///
/// The full technique fields plus `outgoing` and `incoming`: every edge where
/// this technique is the source resp. target, each paired with the neighbor's
/// summary. Both lists are present even when empty.
///
/// # Errors
///
/// Returns 404 Not Found if the id doesn't exist.
pub async fn technique_detail_handler(
    Path(id): Path<i64>,
    State(state): State<EncyclopediaState>,
) -> Result<Json<TechniqueDetailResponse>, AppError> {
    let detail = state.technique_service.get_technique(id).await?;

    Ok(Json(detail.into()))
}

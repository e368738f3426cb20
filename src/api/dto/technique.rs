//! DTOs for the encyclopedia endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    RelatedTechnique, TechniqueFilter, TechniqueSummary, TechniqueWithRelations,
};

/// Query parameters of the technique list endpoint.
///
/// All parameters are optional and combine with logical AND.
#[derive(Debug, Default, Deserialize)]
pub struct TechniqueListQuery {
    pub position: Option<String>,
    #[serde(rename = "type")]
    pub technique_type: Option<String>,
    pub difficulty: Option<String>,
    pub q: Option<String>,
}

impl TechniqueListQuery {
    /// Converts the query into a domain filter.
    ///
    /// Empty-string parameters (`?position=`) are treated as absent, matching
    /// how browsers submit blank form fields.
    pub fn into_filter(self) -> TechniqueFilter {
        TechniqueFilter {
            position: self.position.filter(|v| !v.is_empty()),
            technique_type: self.technique_type.filter(|v| !v.is_empty()),
            difficulty: self.difficulty.filter(|v| !v.is_empty()),
            q: self.q.filter(|v| !v.is_empty()),
        }
    }
}

/// List-view technique item (no instructional lists).
#[derive(Debug, Serialize)]
pub struct TechniqueItem {
    pub id: i64,
    pub name: String,
    pub position: String,
    #[serde(rename = "type")]
    pub technique_type: String,
    pub difficulty: String,
    pub description: String,
}

impl From<TechniqueSummary> for TechniqueItem {
    fn from(summary: TechniqueSummary) -> Self {
        TechniqueItem {
            id: summary.id,
            name: summary.name,
            position: summary.position,
            technique_type: summary.technique_type,
            difficulty: summary.difficulty,
            description: summary.description,
        }
    }
}

/// One adjacency entry in a detail response.
#[derive(Debug, Serialize)]
pub struct RelatedTechniqueItem {
    pub relationship_type: String,
    pub technique: TechniqueItem,
}

impl From<RelatedTechnique> for RelatedTechniqueItem {
    fn from(related: RelatedTechnique) -> Self {
        RelatedTechniqueItem {
            relationship_type: related.relationship_type,
            technique: related.technique.into(),
        }
    }
}

/// Full technique detail with resolved adjacency lists.
///
/// `outgoing` and `incoming` are always present; a technique with no edges
/// serializes them as empty arrays.
#[derive(Debug, Serialize)]
pub struct TechniqueDetailResponse {
    pub id: i64,
    pub name: String,
    pub position: String,
    #[serde(rename = "type")]
    pub technique_type: String,
    pub difficulty: String,
    pub description: String,
    pub steps: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub counters: Vec<String>,
    pub outgoing: Vec<RelatedTechniqueItem>,
    pub incoming: Vec<RelatedTechniqueItem>,
}

impl From<TechniqueWithRelations> for TechniqueDetailResponse {
    fn from(detail: TechniqueWithRelations) -> Self {
        let technique = detail.technique;
        TechniqueDetailResponse {
            id: technique.id,
            name: technique.name,
            position: technique.position,
            technique_type: technique.technique_type,
            difficulty: technique.difficulty,
            description: technique.description,
            steps: technique.steps,
            common_mistakes: technique.common_mistakes,
            counters: technique.counters,
            outgoing: detail.outgoing.into_iter().map(Into::into).collect(),
            incoming: detail.incoming.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_filter_drops_empty_strings() {
        let query = TechniqueListQuery {
            position: Some(String::new()),
            technique_type: Some("Submission".to_string()),
            difficulty: None,
            q: Some(String::new()),
        };

        let filter = query.into_filter();

        assert!(filter.position.is_none());
        assert_eq!(filter.technique_type.as_deref(), Some("Submission"));
        assert!(filter.q.is_none());
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let item = TechniqueItem {
            id: 1,
            name: "Armbar from Guard".to_string(),
            position: "Guard".to_string(),
            technique_type: "Submission".to_string(),
            difficulty: "Beginner".to_string(),
            description: "desc".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Submission");
        assert!(json.get("technique_type").is_none());
    }
}

//! Technique entities for the encyclopedia.

/// A full BJJ technique record.
///
/// The instructional lists (`steps`, `common_mistakes`, `counters`) are
/// ordered; storage must preserve their order.
#[derive(Debug, Clone)]
pub struct Technique {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub technique_type: String,
    pub difficulty: String,
    pub description: String,
    pub steps: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub counters: Vec<String>,
}

impl Technique {
    /// Projects the record onto its list-view summary, dropping the
    /// instructional lists.
    pub fn summary(&self) -> TechniqueSummary {
        TechniqueSummary {
            id: self.id,
            name: self.name.clone(),
            position: self.position.clone(),
            technique_type: self.technique_type.clone(),
            difficulty: self.difficulty.clone(),
            description: self.description.clone(),
        }
    }
}

/// The list-view projection of a technique.
///
/// Detail fields (steps, mistakes, counters) are intentionally excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueSummary {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub technique_type: String,
    pub difficulty: String,
    pub description: String,
}

/// Input data for creating a technique (seed path only).
#[derive(Debug, Clone)]
pub struct NewTechnique {
    pub name: String,
    pub position: String,
    pub technique_type: String,
    pub difficulty: String,
    pub description: String,
    pub steps: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub counters: Vec<String>,
}

/// Input data for creating a directed relationship edge (seed path only).
///
/// Both endpoints must reference existing technique rows; the storage layer
/// enforces this with foreign keys.
#[derive(Debug, Clone)]
pub struct NewRelationship {
    pub from_technique_id: i64,
    pub to_technique_id: i64,
    pub relationship_type: String,
}

/// One adjacency entry: the edge's type paired with the neighbor's summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedTechnique {
    pub relationship_type: String,
    pub technique: TechniqueSummary,
}

/// A technique together with its resolved adjacency lists.
///
/// `outgoing` holds edges where this technique is the source, `incoming` the
/// symmetric set. Techniques with no edges carry empty lists, never absence.
#[derive(Debug, Clone)]
pub struct TechniqueWithRelations {
    pub technique: Technique,
    pub outgoing: Vec<RelatedTechnique>,
    pub incoming: Vec<RelatedTechnique>,
}

/// Optional, AND-combined list filters.
///
/// `position`, `technique_type`, and `difficulty` match exactly; `q` is a
/// case-insensitive substring match against name or description. An empty
/// filter matches every technique.
#[derive(Debug, Clone, Default)]
pub struct TechniqueFilter {
    pub position: Option<String>,
    pub technique_type: Option<String>,
    pub difficulty: Option<String>,
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_technique() -> Technique {
        Technique {
            id: 1,
            name: "Armbar from Guard".to_string(),
            position: "Guard".to_string(),
            technique_type: "Submission".to_string(),
            difficulty: "Beginner".to_string(),
            description: "A fundamental armbar applied from the guard position.".to_string(),
            steps: vec!["Step 1".to_string(), "Step 2".to_string()],
            common_mistakes: vec!["Mistake 1".to_string()],
            counters: vec!["Counter 1".to_string()],
        }
    }

    #[test]
    fn test_summary_projection_drops_detail_fields() {
        let technique = sample_technique();
        let summary = technique.summary();

        assert_eq!(summary.id, 1);
        assert_eq!(summary.name, "Armbar from Guard");
        assert_eq!(summary.position, "Guard");
        assert_eq!(summary.technique_type, "Submission");
        assert_eq!(summary.difficulty, "Beginner");
    }

    #[test]
    fn test_default_filter_is_empty() {
        let filter = TechniqueFilter::default();

        assert!(filter.position.is_none());
        assert!(filter.technique_type.is_none());
        assert!(filter.difficulty.is_none());
        assert!(filter.q.is_none());
    }
}

//! SQLite implementation of the technique repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{
    NewRelationship, NewTechnique, RelatedTechnique, Technique, TechniqueFilter, TechniqueSummary,
};
use crate::domain::repositories::TechniqueRepository;
use crate::error::AppError;

/// SQLite repository for technique storage and graph queries.
///
/// All filters are expressed as `(?N IS NULL OR ...)` predicates so a single
/// prepared statement covers every filter combination. Adjacency queries
/// resolve the neighbor row with an INNER JOIN, which drops edges whose
/// endpoint no longer resolves instead of failing the request.
pub struct SqliteTechniqueRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTechniqueRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TechniqueRow {
    id: i64,
    name: String,
    position: String,
    #[sqlx(rename = "type")]
    technique_type: String,
    difficulty: String,
    description: String,
    steps: Json<Vec<String>>,
    common_mistakes: Json<Vec<String>>,
    counters: Json<Vec<String>>,
}

impl From<TechniqueRow> for Technique {
    fn from(row: TechniqueRow) -> Self {
        Technique {
            id: row.id,
            name: row.name,
            position: row.position,
            technique_type: row.technique_type,
            difficulty: row.difficulty,
            description: row.description,
            steps: row.steps.0,
            common_mistakes: row.common_mistakes.0,
            counters: row.counters.0,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    name: String,
    position: String,
    #[sqlx(rename = "type")]
    technique_type: String,
    difficulty: String,
    description: String,
}

impl From<SummaryRow> for TechniqueSummary {
    fn from(row: SummaryRow) -> Self {
        TechniqueSummary {
            id: row.id,
            name: row.name,
            position: row.position,
            technique_type: row.technique_type,
            difficulty: row.difficulty,
            description: row.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RelatedRow {
    relationship_type: String,
    id: i64,
    name: String,
    position: String,
    #[sqlx(rename = "type")]
    technique_type: String,
    difficulty: String,
    description: String,
}

impl From<RelatedRow> for RelatedTechnique {
    fn from(row: RelatedRow) -> Self {
        RelatedTechnique {
            relationship_type: row.relationship_type,
            technique: TechniqueSummary {
                id: row.id,
                name: row.name,
                position: row.position,
                technique_type: row.technique_type,
                difficulty: row.difficulty,
                description: row.description,
            },
        }
    }
}

#[async_trait]
impl TechniqueRepository for SqliteTechniqueRepository {
    async fn list(&self, filter: &TechniqueFilter) -> Result<Vec<TechniqueSummary>, AppError> {
        // SQLite LIKE is case-insensitive for ASCII, which covers the
        // case-insensitive substring contract of `q`.
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, name, position, type, difficulty, description
            FROM techniques
            WHERE (?1 IS NULL OR position = ?1)
              AND (?2 IS NULL OR type = ?2)
              AND (?3 IS NULL OR difficulty = ?3)
              AND (?4 IS NULL
                   OR name LIKE '%' || ?4 || '%'
                   OR description LIKE '%' || ?4 || '%')
            ORDER BY id
            "#,
        )
        .bind(&filter.position)
        .bind(&filter.technique_type)
        .bind(&filter.difficulty)
        .bind(&filter.q)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TechniqueSummary::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Technique>, AppError> {
        let row = sqlx::query_as::<_, TechniqueRow>(
            r#"
            SELECT id, name, position, type, difficulty, description,
                   steps, common_mistakes, counters
            FROM techniques
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Technique::from))
    }

    async fn outgoing(&self, id: i64) -> Result<Vec<RelatedTechnique>, AppError> {
        let rows = sqlx::query_as::<_, RelatedRow>(
            r#"
            SELECT r.relationship_type,
                   t.id, t.name, t.position, t.type, t.difficulty, t.description
            FROM technique_relationships r
            INNER JOIN techniques t ON t.id = r.to_technique_id
            WHERE r.from_technique_id = ?1
            ORDER BY r.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RelatedTechnique::from).collect())
    }

    async fn incoming(&self, id: i64) -> Result<Vec<RelatedTechnique>, AppError> {
        let rows = sqlx::query_as::<_, RelatedRow>(
            r#"
            SELECT r.relationship_type,
                   t.id, t.name, t.position, t.type, t.difficulty, t.description
            FROM technique_relationships r
            INNER JOIN techniques t ON t.id = r.from_technique_id
            WHERE r.to_technique_id = ?1
            ORDER BY r.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RelatedTechnique::from).collect())
    }

    async fn insert(&self, new_technique: NewTechnique) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO techniques
                (name, position, type, difficulty, description,
                 steps, common_mistakes, counters)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&new_technique.name)
        .bind(&new_technique.position)
        .bind(&new_technique.technique_type)
        .bind(&new_technique.difficulty)
        .bind(&new_technique.description)
        .bind(Json(&new_technique.steps))
        .bind(Json(&new_technique.common_mistakes))
        .bind(Json(&new_technique.counters))
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn insert_relationship(&self, relationship: NewRelationship) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO technique_relationships
                (from_technique_id, to_technique_id, relationship_type)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(relationship.from_technique_id)
        .bind(relationship.to_technique_id)
        .bind(&relationship.relationship_type)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM techniques")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

mod common;

use std::sync::Arc;

use sqlx::SqlitePool;

use dojo_services::domain::entities::{NewRelationship, TechniqueFilter};
use dojo_services::domain::repositories::TechniqueRepository;
use dojo_services::infrastructure::persistence::{SqliteTechniqueRepository, db};
use dojo_services::seed::{self, SeedOutcome};

async fn repository(pool: &SqlitePool) -> SqliteTechniqueRepository {
    db::init_schema(pool).await.unwrap();
    SqliteTechniqueRepository::new(Arc::new(pool.clone()))
}

#[sqlx::test(migrations = false)]
async fn test_insert_and_find_roundtrip(pool: SqlitePool) {
    let repo = repository(&pool).await;

    let id = repo
        .insert(common::new_technique(
            "Armbar from Guard",
            "Guard",
            "Submission",
            "Beginner",
            "A fundamental armbar applied from the guard position.",
        ))
        .await
        .unwrap();

    let technique = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(technique.id, id);
    assert_eq!(technique.name, "Armbar from Guard");
    assert_eq!(technique.technique_type, "Submission");
    // Instructional list order is preserved through the JSON column.
    assert_eq!(technique.steps, vec!["Step 1", "Step 2"]);
    assert_eq!(technique.common_mistakes, vec!["Mistake 1"]);
    assert_eq!(technique.counters, vec!["Counter 1"]);
}

#[sqlx::test(migrations = false)]
async fn test_find_by_id_missing_is_none(pool: SqlitePool) {
    let repo = repository(&pool).await;

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
async fn test_list_unfiltered_follows_insert_order(pool: SqlitePool) {
    let repo = repository(&pool).await;
    common::seed_three_techniques(&pool).await;

    let summaries = repo.list(&TechniqueFilter::default()).await.unwrap();

    assert_eq!(summaries.len(), 3);
    assert!(summaries.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = false)]
async fn test_list_combines_filters(pool: SqlitePool) {
    let repo = repository(&pool).await;
    common::seed_three_techniques(&pool).await;

    let filter = TechniqueFilter {
        position: Some("Guard".to_string()),
        difficulty: Some("Beginner".to_string()),
        ..Default::default()
    };
    let summaries = repo.list(&filter).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Armbar from Guard");
}

#[sqlx::test(migrations = false)]
async fn test_list_substring_search_is_case_insensitive(pool: SqlitePool) {
    let repo = repository(&pool).await;
    common::seed_three_techniques(&pool).await;

    for q in ["armbar", "ARMBAR", "Armbar"] {
        let filter = TechniqueFilter {
            q: Some(q.to_string()),
            ..Default::default()
        };
        let summaries = repo.list(&filter).await.unwrap();
        assert_eq!(summaries.len(), 1, "query {q:?}");
        assert_eq!(summaries[0].name, "Armbar from Guard");
    }
}

#[sqlx::test(migrations = false)]
async fn test_adjacency_is_symmetric(pool: SqlitePool) {
    let repo = repository(&pool).await;
    let (t1, t2, t3) = common::seed_three_techniques(&pool).await;

    let outgoing = repo.outgoing(t1).await.unwrap();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].relationship_type, "leads_to");
    assert_eq!(outgoing[0].technique.id, t2);

    let incoming = repo.incoming(t2).await.unwrap();
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].technique.id, t1);

    assert!(repo.outgoing(t3).await.unwrap().is_empty());
    assert!(repo.incoming(t3).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_multiple_edge_types_between_same_pair(pool: SqlitePool) {
    let repo = repository(&pool).await;
    let (t1, t2, _) = common::seed_three_techniques(&pool).await;

    repo.insert_relationship(NewRelationship {
        from_technique_id: t1,
        to_technique_id: t2,
        relationship_type: "counters".to_string(),
    })
    .await
    .unwrap();

    let outgoing = repo.outgoing(t1).await.unwrap();
    assert_eq!(outgoing.len(), 2);
    assert_eq!(outgoing[0].relationship_type, "leads_to");
    assert_eq!(outgoing[1].relationship_type, "counters");
}

#[sqlx::test(migrations = false)]
async fn test_dangling_edge_is_dropped_from_adjacency(pool: SqlitePool) {
    let repo = repository(&pool).await;
    let (t1, _, _) = common::seed_three_techniques(&pool).await;

    // Foreign keys normally make a dangling edge unreachable; disable them on
    // one connection to simulate a pre-existing integrity violation.
    let mut conn = pool.acquire().await.unwrap();
    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&mut *conn)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO technique_relationships (from_technique_id, to_technique_id, relationship_type)
         VALUES (?1, 9999, 'leads_to')",
    )
    .bind(t1)
    .execute(&mut *conn)
    .await
    .unwrap();
    drop(conn);

    // The dangling edge is filtered out, not surfaced as an error.
    let outgoing = repo.outgoing(t1).await.unwrap();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].technique.name, "Triangle Choke");
}

#[sqlx::test(migrations = false)]
async fn test_foreign_keys_reject_unknown_endpoint(pool: SqlitePool) {
    let repo = repository(&pool).await;
    let (t1, _, _) = common::seed_three_techniques(&pool).await;

    let result = repo
        .insert_relationship(NewRelationship {
            from_technique_id: t1,
            to_technique_id: 9999,
            relationship_type: "leads_to".to_string(),
        })
        .await;

    assert!(result.is_err());
}

#[sqlx::test(migrations = false)]
async fn test_seed_populates_catalog(pool: SqlitePool) {
    let repo = repository(&pool).await;

    let outcome = seed::run(&repo, false).await.unwrap();

    assert_eq!(
        outcome,
        SeedOutcome::Seeded {
            techniques: seed::TECHNIQUES.len(),
            relationships: seed::RELATIONSHIPS.len(),
        }
    );
    assert_eq!(repo.count().await.unwrap(), seed::TECHNIQUES.len() as i64);

    // The canonical search property holds against the real catalog.
    let filter = TechniqueFilter {
        q: Some("armbar".to_string()),
        ..Default::default()
    };
    let matches = repo.list(&filter).await.unwrap();
    assert!(matches.iter().any(|t| t.name == "Armbar from Guard"));
}

#[sqlx::test(migrations = false)]
async fn test_seed_skips_populated_database(pool: SqlitePool) {
    let repo = repository(&pool).await;

    seed::run(&repo, false).await.unwrap();
    let before = repo.count().await.unwrap();

    let outcome = seed::run(&repo, false).await.unwrap();

    assert_eq!(outcome, SeedOutcome::AlreadySeeded);
    assert_eq!(repo.count().await.unwrap(), before);
}

#[sqlx::test(migrations = false)]
async fn test_seed_force_inserts_again(pool: SqlitePool) {
    let repo = repository(&pool).await;

    seed::run(&repo, false).await.unwrap();
    let before = repo.count().await.unwrap();

    let outcome = seed::run(&repo, true).await.unwrap();

    assert!(matches!(outcome, SeedOutcome::Seeded { .. }));
    assert_eq!(repo.count().await.unwrap(), before * 2);
}

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sqlx::SqlitePool;

use dojo_services::api::handlers::{
    health_handler, list_techniques_handler, list_urls_handler, redirect_handler,
    service_info_handler, shorten_handler, technique_detail_handler,
};
use dojo_services::application::services::{ShortenerService, TechniqueService};
use dojo_services::domain::entities::{NewRelationship, NewTechnique};
use dojo_services::domain::repositories::TechniqueRepository;
use dojo_services::infrastructure::memory::InMemoryLinkStore;
use dojo_services::infrastructure::persistence::{SqliteTechniqueRepository, db};
use dojo_services::state::{EncyclopediaState, ShortenerState};

/// Builds a shortener router over a fresh, empty in-memory store.
pub fn shortener_app() -> Router {
    shortener_app_with_base_url(None)
}

pub fn shortener_app_with_base_url(public_base_url: Option<String>) -> Router {
    let store = Arc::new(InMemoryLinkStore::new());
    let shortener_service = Arc::new(ShortenerService::new(store, 6, public_base_url));
    let state = ShortenerState { shortener_service };

    Router::new()
        .route("/", get(service_info_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/urls", get(list_urls_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

/// Builds an encyclopedia router over the given pool, creating the schema.
pub async fn encyclopedia_app(pool: SqlitePool) -> Router {
    db::init_schema(&pool).await.unwrap();

    let repository = Arc::new(SqliteTechniqueRepository::new(Arc::new(pool)));
    let technique_service = Arc::new(TechniqueService::new(repository));
    let state = EncyclopediaState { technique_service };

    Router::new()
        .route("/health", get(health_handler))
        .route("/techniques", get(list_techniques_handler))
        .route("/techniques/{id}", get(technique_detail_handler))
        .with_state(state)
}

pub fn new_technique(
    name: &str,
    position: &str,
    technique_type: &str,
    difficulty: &str,
    description: &str,
) -> NewTechnique {
    NewTechnique {
        name: name.to_string(),
        position: position.to_string(),
        technique_type: technique_type.to_string(),
        difficulty: difficulty.to_string(),
        description: description.to_string(),
        steps: vec!["Step 1".to_string(), "Step 2".to_string()],
        common_mistakes: vec!["Mistake 1".to_string()],
        counters: vec!["Counter 1".to_string()],
    }
}

/// Inserts three techniques and one `leads_to` edge from the first to the
/// second. Returns the assigned ids.
///
/// Creates the schema first, so fixtures can run before the router is built.
pub async fn seed_three_techniques(pool: &SqlitePool) -> (i64, i64, i64) {
    db::init_schema(pool).await.unwrap();
    let repository = SqliteTechniqueRepository::new(Arc::new(pool.clone()));

    let t1 = repository
        .insert(new_technique(
            "Armbar from Guard",
            "Guard",
            "Submission",
            "Beginner",
            "A fundamental armbar applied from the guard position.",
        ))
        .await
        .unwrap();
    let t2 = repository
        .insert(new_technique(
            "Triangle Choke",
            "Guard",
            "Submission",
            "Intermediate",
            "A blood choke using the legs to form a triangle.",
        ))
        .await
        .unwrap();
    let t3 = repository
        .insert(new_technique(
            "Double Leg Takedown",
            "Standing",
            "Transition",
            "Beginner",
            "A wrestling takedown that shoots for both legs.",
        ))
        .await
        .unwrap();

    repository
        .insert_relationship(NewRelationship {
            from_technique_id: t1,
            to_technique_id: t2,
            relationship_type: "leads_to".to_string(),
        })
        .await
        .unwrap();

    (t1, t2, t3)
}

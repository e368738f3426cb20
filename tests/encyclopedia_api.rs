mod common;

use axum_test::TestServer;
use sqlx::SqlitePool;

#[sqlx::test(migrations = false)]
async fn test_health_returns_ok(pool: SqlitePool) {
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "status": "ok" })
    );
}

#[sqlx::test(migrations = false)]
async fn test_list_is_empty_without_data(pool: SqlitePool) {
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[sqlx::test(migrations = false)]
async fn test_list_returns_all_techniques(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = false)]
async fn test_list_items_are_summaries(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let item = &json.as_array().unwrap()[0];

    for field in ["id", "name", "position", "type", "difficulty", "description"] {
        assert!(item.get(field).is_some(), "missing field {field}");
    }

    // Detail fields are excluded from the list view.
    assert!(item.get("steps").is_none());
    assert!(item.get("common_mistakes").is_none());
    assert!(item.get("counters").is_none());
}

#[sqlx::test(migrations = false)]
async fn test_filter_by_position(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques?position=Guard").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["position"], "Guard");
    }
}

#[sqlx::test(migrations = false)]
async fn test_filter_by_type(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques?type=Submission").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["type"], "Submission");
    }
}

#[sqlx::test(migrations = false)]
async fn test_filter_by_difficulty(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques?difficulty=Beginner").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = false)]
async fn test_filter_without_match_is_empty(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques?position=Mount").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[sqlx::test(migrations = false)]
async fn test_combined_filters_use_logical_and(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server
        .get("/techniques?position=Guard&difficulty=Beginner")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Armbar from Guard");
}

#[sqlx::test(migrations = false)]
async fn test_search_matches_name_case_insensitively(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques?q=armbar").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Armbar from Guard");
}

#[sqlx::test(migrations = false)]
async fn test_search_matches_description(pool: SqlitePool) {
    common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques?q=wrestling").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Double Leg Takedown");
}

#[sqlx::test(migrations = false)]
async fn test_detail_returns_full_record(pool: SqlitePool) {
    let (t1, _, _) = common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get(&format!("/techniques/{t1}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], t1);
    assert_eq!(json["name"], "Armbar from Guard");
    assert_eq!(json["steps"].as_array().unwrap().len(), 2);
    assert_eq!(json["common_mistakes"].as_array().unwrap().len(), 1);
    assert_eq!(json["counters"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = false)]
async fn test_detail_includes_outgoing_relationships(pool: SqlitePool) {
    let (t1, _, _) = common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get(&format!("/techniques/{t1}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let outgoing = json["outgoing"].as_array().unwrap();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0]["relationship_type"], "leads_to");
    assert_eq!(outgoing[0]["technique"]["name"], "Triangle Choke");
}

#[sqlx::test(migrations = false)]
async fn test_detail_includes_incoming_relationships(pool: SqlitePool) {
    let (_, t2, _) = common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get(&format!("/techniques/{t2}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let incoming = json["incoming"].as_array().unwrap();
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0]["relationship_type"], "leads_to");
    assert_eq!(incoming[0]["technique"]["name"], "Armbar from Guard");
}

#[sqlx::test(migrations = false)]
async fn test_detail_without_edges_has_empty_lists(pool: SqlitePool) {
    let (_, _, t3) = common::seed_three_techniques(&pool).await;
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get(&format!("/techniques/{t3}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["outgoing"], serde_json::json!([]));
    assert_eq!(json["incoming"], serde_json::json!([]));
}

#[sqlx::test(migrations = false)]
async fn test_detail_unknown_id_is_404(pool: SqlitePool) {
    let server = TestServer::new(common::encyclopedia_app(pool).await).unwrap();

    let response = server.get("/techniques/9999").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    // No partial technique body alongside the error.
    assert!(json.get("name").is_none());
}

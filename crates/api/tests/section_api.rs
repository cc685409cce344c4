//! HTTP-level integration tests for section endpoints and project-scoped
//! note/resource listings.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, create_project, create_section, delete, get, post_json, put_json};
use learnmgr_db::models::note::CreateNote;
use learnmgr_db::models::resource::CreateResource;
use learnmgr_db::repositories::{NoteRepo, ResourceRepo};
use serde_json::{json, Value};
use sqlx::PgPool;

fn orders(sections: &Value) -> Vec<i64> {
    sections
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["order"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sections_get_sequential_orders(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Sequenced"})).await;

    let first = create_section(&pool, &pid, "One").await;
    let second = create_section(&pool, &pid, "Two").await;
    let third = create_section(&pool, &pid, "Three").await;

    assert_eq!(first["order"], 0);
    assert_eq!(second["order"], 1);
    assert_eq!(third["order"], 2);
    assert_eq!(first["projectId"], pid.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_section_stores_content_and_nulls_empty(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Content"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{pid}/sections"),
        json!({"title": "Markdown", "content": "# Heading\n\n- item"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["content"], "# Heading\n\n- item");
    assert_eq!(json["status"], "not-started");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{pid}/sections"),
        json!({"title": "Empty", "content": ""}),
    )
    .await;
    let json = body_json(response).await;
    assert_matches!(json["content"], Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_section_requires_title(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Strict"})).await;

    for body in [
        json!({"title": ""}),
        json!({"content": "no title"}),
        json!({"title": null, "content": "null title"}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &format!("/api/v1/projects/{pid}/sections"), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Title is required");
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{pid}/sections")).await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_section_for_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{}/sections", uuid::Uuid::new_v4()),
        json!({"title": "Lost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_sections_sorted_by_order(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Sorted"})).await;
    let a = create_section(&pool, &pid, "A").await;
    create_section(&pool, &pid, "B").await;

    // Move A behind B.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/sections/{}", a["id"].as_str().unwrap()),
        json!({"title": "A", "order": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{pid}/sections")).await).await;
    assert_eq!(orders(&json), vec![1, 5]);
    assert_eq!(json[0]["title"], "B");
    assert_eq!(json[1]["title"], "A");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_section_is_full_replacement(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Replace"})).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{pid}/sections"),
            json!({"title": "Old", "content": "old body"}),
        )
        .await,
    )
    .await;
    let sid = created["id"].as_str().unwrap();

    // Clients echo the whole section back; unknown keys are ignored and an
    // omitted content clears it.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/sections/{sid}"),
        json!({"id": sid, "projectId": pid, "title": "New", "order": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "New");
    assert!(json["content"].is_null());
    assert_eq!(json["order"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_section_validation(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Validate"})).await;
    let section = create_section(&pool, &pid, "S").await;
    let uri = format!("/api/v1/sections/{}", section["id"].as_str().unwrap());

    for body in [
        json!({"title": "", "order": 0}),
        json!({"title": null, "order": 0}),
        json!({"order": 0}),
        json!({"title": "No order"}),
        json!({"title": "Negative", "order": -1}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = put_json(app, &uri, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_append_after_max_order_is_rejected(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Full"})).await;
    let section = create_section(&pool, &pid, "Last").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/sections/{}", section["id"].as_str().unwrap()),
        json!({"title": "Last", "order": i32::MAX}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{pid}/sections"),
        json!({"title": "One more"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was inserted.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{pid}/sections")).await).await;
    assert_eq!(orders(&json), vec![i32::MAX as i64]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_section_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/sections/{}", uuid::Uuid::new_v4()),
        json!({"title": "Ghost", "order": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_middle_section_keeps_gap(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Gap"})).await;
    create_section(&pool, &pid, "First").await;
    let middle = create_section(&pool, &pid, "Middle").await;
    create_section(&pool, &pid, "Last").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/v1/sections/{}", middle["id"].as_str().unwrap()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/projects/{pid}/sections")).await).await;
    assert_eq!(orders(&json), vec![0, 2]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(json[0]["sectionCount"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_section_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/sections/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Notes and resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_notes_and_resources(pool: PgPool) {
    let pid = create_project(&pool, json!({"title": "Attached"})).await;
    let project_id = uuid::Uuid::parse_str(&pid).unwrap();

    NoteRepo::create(
        &pool,
        &CreateNote {
            project_id,
            title: "Performance".into(),
            content: "Memoize expensive renders".into(),
            note_type: Some("important".into()),
        },
    )
    .await
    .unwrap();
    ResourceRepo::create(
        &pool,
        &CreateResource {
            project_id,
            title: "Reference".into(),
            url: Some("https://doc.rust-lang.org/book/".into()),
            resource_type: None,
            description: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let notes = body_json(get(app, &format!("/api/v1/projects/{pid}/notes")).await).await;
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["type"], "important");

    let app = common::build_test_app(pool);
    let resources = body_json(get(app, &format!("/api/v1/projects/{pid}/resources")).await).await;
    assert_eq!(resources.as_array().unwrap().len(), 1);
    assert_eq!(resources[0]["type"], "link");
    assert_eq!(resources[0]["url"], "https://doc.rust-lang.org/book/");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_notes_for_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{}/notes", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

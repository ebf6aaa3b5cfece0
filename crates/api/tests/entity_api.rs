//! HTTP-level integration tests for the project/stage/asset/component
//! endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_project_returns_201_and_attributes_creator(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Linha 3"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Linha 3");
    assert_eq!(json["status"], "active");
    assert_eq!(json["created_by"], common::TEST_USER);
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_project_without_identity_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    // No x-user-id header.
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/projects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name": "Anonymous"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_and_delete_project(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"name": "Before"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({"name": "After", "status": "completed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "After");
    assert_eq!(json["status"], "completed");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stages nested under projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn stages_are_created_and_listed_in_order(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P"})).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    for name in ["Inspecao Visual", "Teste Funcional"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/projects/{project_id}/stages"),
            serde_json::json!({"name": name, "stage_type": "funcional"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{project_id}/stages")).await).await;
    let stages = json.as_array().unwrap();
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0]["name"], "Inspecao Visual");
    assert_eq!(stages[0]["sort_order"], 0);
    assert_eq!(stages[1]["sort_order"], 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn stage_creation_under_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects/999999/stages",
        serde_json::json!({"name": "Orphan", "stage_type": "visual"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn reorder_rewrites_sort_order(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P"})).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let app = common::build_test_app(pool.clone());
        let stage = body_json(
            post_json(
                app,
                &format!("/api/v1/projects/{project_id}/stages"),
                serde_json::json!({"name": name, "stage_type": "visual"}),
            )
            .await,
        )
        .await;
        ids.push(stage["id"].as_i64().unwrap());
    }

    ids.reverse();
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{project_id}/stages/reorder"),
        serde_json::json!({"stage_ids": ids}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let stages = json.as_array().unwrap();
    assert_eq!(stages[0]["name"], "c");
    assert_eq!(stages[2]["name"], "a");
}

// ---------------------------------------------------------------------------
// Assets and components
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn asset_and_component_hierarchy(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P"})).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let asset = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{project_id}/assets"),
            serde_json::json!({"name": "Bomba 01", "asset_type": "bomba"}),
        )
        .await,
    )
    .await;
    let asset_id = asset["id"].as_i64().unwrap();
    assert_eq!(asset["project_id"], project_id);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/assets/{asset_id}/components"),
        serde_json::json!({"name": "Selo mecanico"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/assets/{asset_id}/components")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/assets/999999/components",
        serde_json::json!({"name": "Orphan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

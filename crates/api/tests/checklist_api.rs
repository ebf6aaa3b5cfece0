//! HTTP-level integration tests for checklist templates and executions.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json, put_json};
use sqlx::PgPool;

/// Create a project, a stage and a two-field template; returns
/// (project_id, stage_id, template JSON).
async fn seed(pool: &PgPool) -> (i64, i64, serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P"})).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let stage = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{project_id}/stages"),
            serde_json::json!({"name": "Comissionamento", "stage_type": "funcional"}),
        )
        .await,
    )
    .await;
    let stage_id = stage["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let template = body_json(
        post_json(
            app,
            "/api/v1/checklist-templates",
            serde_json::json!({
                "name": "Partida de bomba",
                "fields": [
                    {"label": "Pressão de Sucção", "type": "number", "required": true},
                    {"label": "Aprovado", "type": "boolean"},
                ],
            }),
        )
        .await,
    )
    .await;

    (project_id, stage_id, template)
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn template_creation_assigns_slug_ids(pool: PgPool) {
    let (_, _, template) = seed(&pool).await;

    assert_eq!(template["version"], 1);
    // Accents stripped, whitespace collapsed to underscores.
    assert_eq!(template["fields"][0]["id"], "pressao_de_succao");
    assert_eq!(template["fields"][1]["id"], "aprovado");
}

#[sqlx::test(migrations = "../../migrations")]
async fn template_update_bumps_version(pool: PgPool) {
    let (_, _, template) = seed(&pool).await;
    let id = template["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/checklist-templates/{id}"),
        serde_json::json!({"description": "rev A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["version"], 2);
    assert_eq!(json["description"], "rev A");
}

#[sqlx::test(migrations = "../../migrations")]
async fn template_with_duplicate_field_ids_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checklist-templates",
        serde_json::json!({
            "name": "Bad",
            "fields": [
                {"id": "x", "label": "A", "type": "text"},
                {"id": "x", "label": "B", "type": "text"},
            ],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Executions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn execution_creation_captures_template_version(pool: PgPool) {
    let (project_id, stage_id, template) = seed(&pool).await;
    let template_id = template["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checklist-executions",
        serde_json::json!({
            "template_id": template_id,
            "project_id": project_id,
            "stage_id": stage_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "draft");
    assert_eq!(json["template_version"], 1);
    assert_eq!(json["responses"], serde_json::json!({}));
    assert_eq!(json["audit_trail"].as_array().unwrap().len(), 1);
    assert_eq!(json["audit_trail"][0]["action"], "created");
    assert_eq!(json["audit_trail"][0]["userId"], common::TEST_USER);
}

#[sqlx::test(migrations = "../../migrations")]
async fn execution_creation_under_missing_stage_returns_404(pool: PgPool) {
    let (project_id, _, template) = seed(&pool).await;
    let template_id = template["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/checklist-executions",
        serde_json::json!({
            "template_id": template_id,
            "project_id": project_id,
            "stage_id": 999999,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn execution_lifecycle_and_frozen_after_submit(pool: PgPool) {
    let (project_id, stage_id, template) = seed(&pool).await;
    let template_id = template["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let execution = body_json(
        post_json(
            app,
            "/api/v1/checklist-executions",
            serde_json::json!({
                "template_id": template_id,
                "project_id": project_id,
                "stage_id": stage_id,
            }),
        )
        .await,
    )
    .await;
    let id = execution["id"].as_i64().unwrap();

    // Save a draft.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/checklist-executions/{id}"),
        serde_json::json!({
            "responses": {"pressao_de_succao": 4.2, "aprovado": true},
            "audit": {"action": "draft_saved", "changedFields": ["pressao_de_succao", "aprovado"]},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["responses"]["pressao_de_succao"], 4.2);
    assert_eq!(json["audit_trail"].as_array().unwrap().len(), 2);

    // Submit.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/checklist-executions/{id}"),
        serde_json::json!({
            "status": "submitted",
            "audit": {"action": "submitted", "previousStatus": "draft"},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "submitted");
    assert!(json["submitted_at"].is_string());
    assert!(json["approved_at"].is_null());

    // Further mutation is rejected with 409.
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/checklist-executions/{id}"),
        serde_json::json!({
            "responses": {"aprovado": false},
            "audit": {"action": "draft_saved"},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");

    // Stored document is unchanged.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/checklist-executions/{id}")).await).await;
    assert_eq!(json["responses"]["aprovado"], true);
    assert_eq!(json["audit_trail"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn executions_are_listed_by_stage_and_project(pool: PgPool) {
    let (project_id, stage_id, template) = seed(&pool).await;
    let template_id = template["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/checklist-executions",
        serde_json::json!({
            "template_id": template_id,
            "project_id": project_id,
            "stage_id": stage_id,
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let by_stage =
        body_json(get(app, &format!("/api/v1/stages/{stage_id}/checklist-executions")).await).await;
    assert_eq!(by_stage.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let by_project = body_json(
        get(
            app,
            &format!("/api/v1/projects/{project_id}/checklist-executions"),
        )
        .await,
    )
    .await;
    assert_eq!(by_project.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Global audit log and dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn mutations_are_recorded_in_the_global_audit_log(pool: PgPool) {
    seed(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/audit-logs?entity_type=project").await).await;

    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["action"], "created");
    assert_eq!(json["items"][0]["user_id"], common::TEST_USER);
}

#[sqlx::test(migrations = "../../migrations")]
async fn dashboard_stats_reflect_seeded_entities(pool: PgPool) {
    let (project_id, stage_id, template) = seed(&pool).await;
    let template_id = template["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/checklist-executions",
        serde_json::json!({
            "template_id": template_id,
            "project_id": project_id,
            "stage_id": stage_id,
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/dashboard/stats").await).await;

    assert_eq!(json["total_projects"], 1);
    assert_eq!(json["active_projects"], 1);
    assert_eq!(json["total_templates"], 1);
    assert_eq!(json["total_executions"], 1);
    assert_eq!(json["draft_executions"], 1);
    assert_eq!(json["submitted_executions"], 0);
}

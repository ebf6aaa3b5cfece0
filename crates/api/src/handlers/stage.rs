//! Handlers for commissioning stages.
//!
//! Creation and listing are project-scoped; get/update/delete address a
//! stage directly by id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use comtrack_core::error::CoreError;
use comtrack_core::types::DbId;
use comtrack_db::models::stage::{CreateStage, ReorderStages, Stage, UpdateStage};
use comtrack_db::repositories::{ProjectRepo, StageRepo};

use crate::audit::{entity_audit, record_audit};
use crate::error::{AppError, AppResult};
use crate::identity::Identity;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/stages
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    identity: Identity,
    Json(input): Json<CreateStage>,
) -> AppResult<(StatusCode, Json<Stage>)> {
    // Fail with 404 rather than a foreign-key error from the insert.
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let stage = StageRepo::create(&state.pool, project_id, &input, &identity.user_id).await?;
    record_audit(
        &state.pool,
        entity_audit(
            "created",
            "stage",
            stage.id,
            Some(stage.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok((StatusCode::CREATED, Json(stage)))
}

/// GET /api/v1/projects/{project_id}/stages
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Stage>>> {
    let stages = StageRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(stages))
}

/// PUT /api/v1/projects/{project_id}/stages/reorder
pub async fn reorder(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    identity: Identity,
    Json(input): Json<ReorderStages>,
) -> AppResult<Json<Vec<Stage>>> {
    StageRepo::reorder(&state.pool, project_id, &input.stage_ids).await?;
    record_audit(
        &state.pool,
        entity_audit("reordered", "stage", project_id, None, &identity.user_id),
    )
    .await;
    let stages = StageRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(stages))
}

/// GET /api/v1/stages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Stage>> {
    let stage = StageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Stage", id }))?;
    Ok(Json(stage))
}

/// PUT /api/v1/stages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdateStage>,
) -> AppResult<Json<Stage>> {
    let stage = StageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Stage", id }))?;
    record_audit(
        &state.pool,
        entity_audit(
            "updated",
            "stage",
            stage.id,
            Some(stage.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok(Json(stage))
}

/// DELETE /api/v1/stages/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = StageRepo::delete(&state.pool, id).await?;
    if deleted {
        record_audit(
            &state.pool,
            entity_audit("deleted", "stage", id, None, &identity.user_id),
        )
        .await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Stage", id }))
    }
}

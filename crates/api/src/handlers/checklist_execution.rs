//! Handlers for checklist executions.
//!
//! Creation captures the template's current version when the caller does
//! not supply one; a missing template is tolerated so an execution can
//! still be raised against an id the caller trusts. Mutations go through
//! the draft-only guard in the store and carry caller-supplied audit
//! metadata into the embedded trail.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use comtrack_core::error::CoreError;
use comtrack_core::execution::{AuditMeta, ExecutionStatus, ResponseValue};
use comtrack_core::types::DbId;
use comtrack_db::models::checklist_execution::{
    ChecklistExecution, CreateChecklistExecution, UpdateChecklistExecution,
};
use comtrack_db::repositories::{ChecklistExecutionRepo, ChecklistTemplateRepo, StageRepo};
use serde::Deserialize;

use crate::audit::{entity_audit, record_audit};
use crate::error::{AppError, AppResult};
use crate::identity::Identity;
use crate::state::AppState;

/// Request body for PATCH /checklist-executions/{id}: the mutation plus
/// the audit metadata describing it.
#[derive(Debug, Deserialize)]
pub struct UpdateExecutionRequest {
    pub responses: Option<HashMap<String, ResponseValue>>,
    pub status: Option<ExecutionStatus>,
    pub audit: AuditMeta,
}

/// POST /api/v1/checklist-executions
pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    Json(mut input): Json<CreateChecklistExecution>,
) -> AppResult<(StatusCode, Json<ChecklistExecution>)> {
    StageRepo::find_by_id(&state.pool, input.stage_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stage",
            id: input.stage_id,
        }))?;

    if input.template_version.is_none() {
        let template = ChecklistTemplateRepo::find_by_id(&state.pool, input.template_id).await?;
        input.template_version = template.map(|t| t.version);
    }

    let execution = ChecklistExecutionRepo::create(&state.pool, &input, &identity.user_id).await?;
    record_audit(
        &state.pool,
        entity_audit(
            "created",
            "checklist_execution",
            execution.id,
            None,
            &identity.user_id,
        ),
    )
    .await;
    Ok((StatusCode::CREATED, Json(execution)))
}

/// GET /api/v1/checklist-executions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChecklistExecution>> {
    let execution = ChecklistExecutionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChecklistExecution",
            id,
        }))?;
    Ok(Json(execution))
}

/// GET /api/v1/stages/{stage_id}/checklist-executions
pub async fn list_by_stage(
    State(state): State<AppState>,
    Path(stage_id): Path<DbId>,
) -> AppResult<Json<Vec<ChecklistExecution>>> {
    let executions = ChecklistExecutionRepo::list_by_stage(&state.pool, stage_id).await?;
    Ok(Json(executions))
}

/// GET /api/v1/projects/{project_id}/checklist-executions
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ChecklistExecution>>> {
    let executions = ChecklistExecutionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(executions))
}

/// PATCH /api/v1/checklist-executions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(body): Json<UpdateExecutionRequest>,
) -> AppResult<Json<ChecklistExecution>> {
    let input = UpdateChecklistExecution {
        responses: body.responses,
        status: body.status,
    };
    let execution =
        ChecklistExecutionRepo::update(&state.pool, id, &input, &identity.user_id, &body.audit)
            .await?;
    record_audit(
        &state.pool,
        entity_audit(
            &body.audit.action,
            "checklist_execution",
            execution.id,
            None,
            &identity.user_id,
        ),
    )
    .await;
    Ok(Json(execution))
}

//! Handlers for checklist templates.
//!
//! Incoming field sets pass through `prepare_template_fields` before they
//! reach the store, so fields posted without ids get slugs derived from
//! their labels and select options get values derived from theirs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use comtrack_core::error::CoreError;
use comtrack_core::fields::prepare_template_fields;
use comtrack_core::types::DbId;
use comtrack_db::models::checklist_template::{
    ChecklistTemplate, CreateChecklistTemplate, UpdateChecklistTemplate,
};
use comtrack_db::repositories::ChecklistTemplateRepo;

use crate::audit::{entity_audit, record_audit};
use crate::error::{AppError, AppResult};
use crate::identity::Identity;
use crate::state::AppState;

/// POST /api/v1/checklist-templates
pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    Json(mut input): Json<CreateChecklistTemplate>,
) -> AppResult<(StatusCode, Json<ChecklistTemplate>)> {
    input.fields = prepare_template_fields(input.fields)?;

    let template = ChecklistTemplateRepo::create(&state.pool, &input, &identity.user_id).await?;
    record_audit(
        &state.pool,
        entity_audit(
            "created",
            "checklist_template",
            template.id,
            Some(template.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/checklist-templates
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ChecklistTemplate>>> {
    let templates = ChecklistTemplateRepo::list(&state.pool).await?;
    Ok(Json(templates))
}

/// GET /api/v1/checklist-templates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChecklistTemplate>> {
    let template = ChecklistTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChecklistTemplate",
            id,
        }))?;
    Ok(Json(template))
}

/// PUT /api/v1/checklist-templates/{id}
///
/// Any update bumps the template version, even when the payload changes
/// nothing.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(mut input): Json<UpdateChecklistTemplate>,
) -> AppResult<Json<ChecklistTemplate>> {
    if let Some(fields) = input.fields.take() {
        input.fields = Some(prepare_template_fields(fields)?);
    }

    let template = ChecklistTemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChecklistTemplate",
            id,
        }))?;
    record_audit(
        &state.pool,
        entity_audit(
            "updated",
            "checklist_template",
            template.id,
            Some(template.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok(Json(template))
}

/// DELETE /api/v1/checklist-templates/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = ChecklistTemplateRepo::delete(&state.pool, id).await?;
    if deleted {
        record_audit(
            &state.pool,
            entity_audit("deleted", "checklist_template", id, None, &identity.user_id),
        )
        .await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ChecklistTemplate",
            id,
        }))
    }
}

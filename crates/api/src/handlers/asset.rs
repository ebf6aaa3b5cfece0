//! Handlers for assets (equipment under commissioning).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use comtrack_core::error::CoreError;
use comtrack_core::types::DbId;
use comtrack_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use comtrack_db::repositories::{AssetRepo, ProjectRepo};

use crate::audit::{entity_audit, record_audit};
use crate::error::{AppError, AppResult};
use crate::identity::Identity;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/assets
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    identity: Identity,
    Json(input): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let asset = AssetRepo::create(&state.pool, project_id, &input, &identity.user_id).await?;
    record_audit(
        &state.pool,
        entity_audit(
            "created",
            "asset",
            asset.id,
            Some(asset.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/v1/projects/{project_id}/assets
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(assets))
}

/// GET /api/v1/assets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRepo::list(&state.pool).await?;
    Ok(Json(assets))
}

/// GET /api/v1/assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(Json(asset))
}

/// PUT /api/v1/assets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    record_audit(
        &state.pool,
        entity_audit(
            "updated",
            "asset",
            asset.id,
            Some(asset.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok(Json(asset))
}

/// DELETE /api/v1/assets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;
    if deleted {
        record_audit(
            &state.pool,
            entity_audit("deleted", "asset", id, None, &identity.user_id),
        )
        .await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Asset", id }))
    }
}

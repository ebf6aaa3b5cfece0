//! Handlers for components nested under assets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use comtrack_core::error::CoreError;
use comtrack_core::types::DbId;
use comtrack_db::models::component::{Component, CreateComponent, UpdateComponent};
use comtrack_db::repositories::{AssetRepo, ComponentRepo};

use crate::audit::{entity_audit, record_audit};
use crate::error::{AppError, AppResult};
use crate::identity::Identity;
use crate::state::AppState;

/// POST /api/v1/assets/{asset_id}/components
pub async fn create(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
    identity: Identity,
    Json(input): Json<CreateComponent>,
) -> AppResult<(StatusCode, Json<Component>)> {
    AssetRepo::find_by_id(&state.pool, asset_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }))?;

    let component = ComponentRepo::create(&state.pool, asset_id, &input, &identity.user_id).await?;
    record_audit(
        &state.pool,
        entity_audit(
            "created",
            "component",
            component.id,
            Some(component.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok((StatusCode::CREATED, Json(component)))
}

/// GET /api/v1/assets/{asset_id}/components
pub async fn list_by_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<DbId>,
) -> AppResult<Json<Vec<Component>>> {
    let components = ComponentRepo::list_by_asset(&state.pool, asset_id).await?;
    Ok(Json(components))
}

/// GET /api/v1/components/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Component>> {
    let component = ComponentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id,
        }))?;
    Ok(Json(component))
}

/// PUT /api/v1/components/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdateComponent>,
) -> AppResult<Json<Component>> {
    let component = ComponentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id,
        }))?;
    record_audit(
        &state.pool,
        entity_audit(
            "updated",
            "component",
            component.id,
            Some(component.name.clone()),
            &identity.user_id,
        ),
    )
    .await;
    Ok(Json(component))
}

/// DELETE /api/v1/components/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = ComponentRepo::delete(&state.pool, id).await?;
    if deleted {
        record_audit(
            &state.pool,
            entity_audit("deleted", "component", id, None, &identity.user_id),
        )
        .await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id,
        }))
    }
}

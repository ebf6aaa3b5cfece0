//! Asset (equipment) entity model and DTOs.

use comtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An asset row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub asset_type: Option<String>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new asset within a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub name: String,
    pub description: Option<String>,
    pub asset_type: Option<String>,
}

/// DTO for updating an existing asset. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub asset_type: Option<String>,
}

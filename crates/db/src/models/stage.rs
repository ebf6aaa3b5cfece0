//! Commissioning stage entity model and DTOs.

use comtrack_core::status::StageType;
use comtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stage row from the `stages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stage {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub stage_type: String,
    pub sort_order: i32,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new stage within a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStage {
    pub name: String,
    pub stage_type: StageType,
    /// Defaults to the end of the project's stage list if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing stage. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStage {
    pub name: Option<String>,
    pub stage_type: Option<StageType>,
    pub sort_order: Option<i32>,
}

/// DTO for reordering all stages of a project in one write.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderStages {
    /// Stage ids in their new order; `sort_order` is rewritten 0..n.
    pub stage_ids: Vec<DbId>,
}

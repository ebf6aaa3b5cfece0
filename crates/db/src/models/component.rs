//! Component entity model and DTOs.

use comtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A component row from the `components` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Component {
    pub id: DbId,
    pub asset_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new component within an asset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComponent {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing component. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComponent {
    pub name: Option<String>,
    pub description: Option<String>,
}

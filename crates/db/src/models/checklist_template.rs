//! Checklist template entity model and DTOs.
//!
//! The field set is a JSONB document; [`comtrack_core::fields`] owns its
//! shape and validation. `version` counts administrative updates: it starts
//! at 1 and every update bumps it by exactly 1, whether or not the field set
//! changed.

use comtrack_core::fields::TemplateField;
use comtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A template row from the `checklist_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChecklistTemplate {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub version: i32,
    pub fields: Json<Vec<TemplateField>>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChecklistTemplate {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<TemplateField>,
}

/// DTO for updating an existing template. All fields are optional; any
/// update bumps `version` regardless of what is provided.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChecklistTemplate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<TemplateField>>,
}

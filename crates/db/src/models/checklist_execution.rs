//! Checklist execution entity model and DTOs.
//!
//! An execution is one filled-out instance of a template tied to a
//! project/stage. The responses map and the append-only audit trail are
//! embedded in the row as JSONB, so a mutation and its trail entry commit as
//! one write.

use std::collections::HashMap;

use comtrack_core::execution::{AuditTrailEntry, ExecutionStatus, ResponseValue};
use comtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// An execution row from the `checklist_executions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChecklistExecution {
    pub id: DbId,
    pub template_id: DbId,
    /// Template version captured at creation time, for audit purposes.
    pub template_version: Option<i32>,
    pub project_id: DbId,
    pub stage_id: DbId,
    pub asset_id: Option<DbId>,
    pub status: String,
    pub responses: Json<HashMap<String, ResponseValue>>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub submitted_at: Option<Timestamp>,
    pub approved_at: Option<Timestamp>,
    pub audit_trail: Json<Vec<AuditTrailEntry>>,
}

/// DTO for creating a new execution. Status starts as draft with empty
/// responses; the creator is attributed in the first trail entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChecklistExecution {
    pub template_id: DbId,
    /// Captured from the template at creation time when omitted.
    pub template_version: Option<i32>,
    pub project_id: DbId,
    pub stage_id: DbId,
    pub asset_id: Option<DbId>,
}

/// DTO for mutating a draft execution.
///
/// `responses`, when provided, replaces the stored map wholesale; merging
/// with existing values is the caller's responsibility. Response values are
/// not validated against the template's field types here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChecklistExecution {
    pub responses: Option<HashMap<String, ResponseValue>>,
    pub status: Option<ExecutionStatus>,
}

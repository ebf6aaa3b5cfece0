//! Global audit log entity models and DTOs.
//!
//! Distinct from the audit trail embedded in checklist executions: these
//! rows are written best-effort by the API layer and never block a primary
//! operation. Records are immutable once created (no `updated_at`).

use comtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single audit log entry from the `audit_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<DbId>,
    pub entity_name: Option<String>,
    pub user_id: String,
    pub description: String,
    pub details: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new audit log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuditLog {
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<DbId>,
    pub entity_name: Option<String>,
    pub user_id: String,
    pub description: String,
    pub details: Option<serde_json::Value>,
}

/// Filter parameters for querying audit logs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogQuery {
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub user_id: Option<String>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Paginated response for audit log queries.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogPage {
    pub items: Vec<AuditLog>,
    pub total: i64,
}

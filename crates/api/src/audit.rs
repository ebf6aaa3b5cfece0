//! Best-effort global audit recording.
//!
//! Distinct from the audit trail embedded in checklist executions (which
//! commits atomically with the primary write): these entries are
//! fire-and-forget. A failed insert is logged and never propagated, so
//! audit unavailability cannot block a primary operation.

use comtrack_db::models::audit_log::CreateAuditLog;
use comtrack_db::repositories::AuditLogRepo;
use comtrack_db::DbPool;

/// Record a global audit entry, swallowing any failure.
pub async fn record_audit(pool: &DbPool, entry: CreateAuditLog) {
    if let Err(err) = AuditLogRepo::insert(pool, &entry).await {
        tracing::warn!(
            error = %err,
            action = %entry.action,
            entity_type = %entry.entity_type,
            "failed to record audit log entry"
        );
    }
}

/// Build a standard entry for an entity mutation.
pub fn entity_audit(
    action: &str,
    entity_type: &str,
    entity_id: i64,
    entity_name: Option<String>,
    user_id: &str,
) -> CreateAuditLog {
    CreateAuditLog {
        action: action.to_string(),
        entity_type: entity_type.to_string(),
        entity_id: Some(entity_id),
        entity_name,
        user_id: user_id.to_string(),
        description: format!("{entity_type} {action}"),
        details: None,
    }
}

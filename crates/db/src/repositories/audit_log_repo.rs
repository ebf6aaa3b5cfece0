//! Repository for the `audit_logs` table.
//!
//! Insert plus filtered query/count. Rows are append-only; there is no
//! update or delete path.

use comtrack_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::audit_log::{AuditLog, AuditLogQuery, CreateAuditLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, action, entity_type, entity_id, entity_name, \
    user_id, description, details, created_at";

/// Provides insert and query operations for the global audit log.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Insert a new audit log entry, returning the created row.
    pub async fn insert(pool: &PgPool, entry: &CreateAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs
                (action, entity_type, entity_id, entity_name, user_id, description, details)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(&entry.action)
            .bind(&entry.entity_type)
            .bind(entry.entity_id)
            .bind(&entry.entity_name)
            .bind(&entry.user_id)
            .bind(&entry.description)
            .bind(&entry.details)
            .fetch_one(pool)
            .await
    }

    /// Query audit logs with filtering and pagination, newest first.
    pub async fn query(pool: &PgPool, params: &AuditLogQuery) -> Result<Vec<AuditLog>, sqlx::Error> {
        let limit = params.limit.unwrap_or(50).min(500);
        let offset = params.offset.unwrap_or(0);

        let (where_clause, bind_values, bind_idx) = build_filter(params);

        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, AuditLog>(&query);
        for value in &bind_values {
            q = match value {
                BindValue::Text(v) => q.bind(v),
                BindValue::Timestamp(v) => q.bind(v),
            };
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count audit logs matching the given filter (for pagination metadata).
    pub async fn count(pool: &PgPool, params: &AuditLogQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_filter(params);

        let query = format!("SELECT COUNT(*)::BIGINT FROM audit_logs {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for value in &bind_values {
            q = match value {
                BindValue::Text(v) => q.bind(v),
                BindValue::Timestamp(v) => q.bind(v),
            };
        }
        q.fetch_one(pool).await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built audit log queries.
enum BindValue {
    Text(String),
    Timestamp(Timestamp),
}

/// Build a WHERE clause and bind values from `AuditLogQuery` filter
/// parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty when no filters are active, or starts with `WHERE `.
fn build_filter(params: &AuditLogQuery) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref action) = params.action {
        conditions.push(format!("action = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(action.clone()));
    }

    if let Some(ref entity_type) = params.entity_type {
        conditions.push(format!("entity_type = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(entity_type.clone()));
    }

    if let Some(ref user_id) = params.user_id {
        conditions.push(format!("user_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(user_id.clone()));
    }

    if let Some(from) = params.from {
        conditions.push(format!("created_at >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(from));
    }

    if let Some(to) = params.to {
        conditions.push(format!("created_at <= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(to));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

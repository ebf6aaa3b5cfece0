//! Repository for the `checklist_executions` table.
//!
//! The draft-only mutation guard and the audit trail append both live here.
//! `update` takes a row lock before reading the current status, so two
//! concurrent updates serialize instead of racing on the trail append; the
//! trail entry and the primary mutation commit as a single write.

use comtrack_core::error::CoreError;
use comtrack_core::execution::{
    ensure_editable, AuditMeta, AuditTrailEntry, ExecutionStatus, ACTION_CREATED,
};
use comtrack_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::checklist_execution::{
    ChecklistExecution, CreateChecklistExecution, UpdateChecklistExecution,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, template_id, template_version, project_id, stage_id, asset_id, \
    status, responses, created_by, created_at, updated_at, \
    submitted_at, approved_at, audit_trail";

/// Provides CRUD operations for checklist executions. No delete is exposed:
/// executions are never removed through this store.
pub struct ChecklistExecutionRepo;

impl ChecklistExecutionRepo {
    /// Insert a new execution in draft with empty responses and a single
    /// "created" trail entry, returning the created row.
    ///
    /// One clock reading stamps `created_at`, `updated_at` and the embedded
    /// entry so the initial document is self-consistent.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChecklistExecution,
        created_by: &str,
    ) -> Result<ChecklistExecution, sqlx::Error> {
        let now = chrono::Utc::now();
        let trail = vec![AuditTrailEntry {
            user_id: created_by.to_string(),
            action: ACTION_CREATED.to_string(),
            timestamp: now,
            previous_status: None,
            changed_fields: None,
        }];

        let query = format!(
            "INSERT INTO checklist_executions
                (template_id, template_version, project_id, stage_id, asset_id,
                 status, responses, created_by, created_at, updated_at, audit_trail)
             VALUES ($1, $2, $3, $4, $5, 'draft', '{{}}'::jsonb, $6, $7, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistExecution>(&query)
            .bind(input.template_id)
            .bind(input.template_version)
            .bind(input.project_id)
            .bind(input.stage_id)
            .bind(input.asset_id)
            .bind(created_by)
            .bind(now)
            .bind(Json(&trail))
            .fetch_one(pool)
            .await
    }

    /// Find an execution by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ChecklistExecution>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checklist_executions WHERE id = $1");
        sqlx::query_as::<_, ChecklistExecution>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a stage's executions ordered by most recently created first.
    pub async fn list_by_stage(
        pool: &PgPool,
        stage_id: DbId,
    ) -> Result<Vec<ChecklistExecution>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checklist_executions WHERE stage_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ChecklistExecution>(&query)
            .bind(stage_id)
            .fetch_all(pool)
            .await
    }

    /// List a project's executions ordered by most recently created first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ChecklistExecution>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checklist_executions WHERE project_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ChecklistExecution>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Mutate a draft execution, appending exactly one audit trail entry.
    ///
    /// Fails with `CoreError::NotFound` if the id is absent and
    /// `CoreError::InvalidState` if the current status is not draft; the
    /// stored row is untouched in both cases.
    ///
    /// When `responses` is provided it replaces the stored map wholesale.
    /// Setting status to `submitted` stamps `submitted_at`; `approved`
    /// stamps `approved_at`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChecklistExecution,
        acting_user_id: &str,
        audit: &AuditMeta,
    ) -> Result<ChecklistExecution, StoreError> {
        let mut tx = pool.begin().await?;

        let current: Option<(String,)> =
            sqlx::query_as("SELECT status FROM checklist_executions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((status,)) = current else {
            return Err(CoreError::NotFound {
                entity: "ChecklistExecution",
                id,
            }
            .into());
        };
        let status = ExecutionStatus::from_str(&status).ok_or_else(|| {
            CoreError::Internal(format!("unknown execution status in store: {status}"))
        })?;
        ensure_editable(status)?;

        let now = chrono::Utc::now();
        let entry = AuditTrailEntry {
            user_id: acting_user_id.to_string(),
            action: audit.action.clone(),
            timestamp: now,
            previous_status: audit.previous_status,
            changed_fields: audit.changed_fields.clone(),
        };

        let submitted_at = (input.status == Some(ExecutionStatus::Submitted)).then_some(now);
        let approved_at = (input.status == Some(ExecutionStatus::Approved)).then_some(now);

        let query = format!(
            "UPDATE checklist_executions SET
                status = COALESCE($2, status),
                responses = COALESCE($3, responses),
                audit_trail = audit_trail || $4,
                updated_at = $5,
                submitted_at = COALESCE($6, submitted_at),
                approved_at = COALESCE($7, approved_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, ChecklistExecution>(&query)
            .bind(id)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.responses.as_ref().map(Json))
            .bind(Json(vec![entry]))
            .bind(now)
            .bind(submitted_at)
            .bind(approved_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }
}

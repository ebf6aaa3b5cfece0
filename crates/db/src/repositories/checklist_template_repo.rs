//! Repository for the `checklist_templates` table.
//!
//! Owns version incrementing: every update writes `version + 1`, even when
//! the provided payload changes nothing. `version` tracks the count of
//! administrative updates, not field-set revisions, and executions keep a
//! denormalized copy of the version they were created under.

use comtrack_core::fields::validate_template_fields;
use comtrack_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::checklist_template::{
    ChecklistTemplate, CreateChecklistTemplate, UpdateChecklistTemplate,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, version, fields, created_by, created_at, updated_at";

/// Provides CRUD operations for checklist templates.
pub struct ChecklistTemplateRepo;

impl ChecklistTemplateRepo {
    /// Insert a new template at version 1, returning the created row.
    ///
    /// The field set is validated defensively; callers are expected to have
    /// run `prepare_template_fields` already.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChecklistTemplate,
        created_by: &str,
    ) -> Result<ChecklistTemplate, StoreError> {
        validate_template_fields(&input.fields)?;

        let query = format!(
            "INSERT INTO checklist_templates (name, description, version, fields, created_by)
             VALUES ($1, $2, 1, $3, $4)
             RETURNING {COLUMNS}"
        );
        let template = sqlx::query_as::<_, ChecklistTemplate>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(Json(&input.fields))
            .bind(created_by)
            .fetch_one(pool)
            .await?;
        Ok(template)
    }

    /// Find a template by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ChecklistTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checklist_templates WHERE id = $1");
        sqlx::query_as::<_, ChecklistTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all templates ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ChecklistTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checklist_templates ORDER BY created_at DESC");
        sqlx::query_as::<_, ChecklistTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a template. Only non-`None` fields in `input` are applied, but
    /// `version` is always bumped by exactly 1.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChecklistTemplate,
    ) -> Result<Option<ChecklistTemplate>, StoreError> {
        if let Some(fields) = &input.fields {
            validate_template_fields(fields)?;
        }

        let query = format!(
            "UPDATE checklist_templates SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                fields = COALESCE($4, fields),
                version = version + 1,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let template = sqlx::query_as::<_, ChecklistTemplate>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.fields.as_ref().map(Json))
            .fetch_optional(pool)
            .await?;
        Ok(template)
    }

    /// Delete a template by ID. Returns `true` if a row was removed.
    ///
    /// Unconditional: existing executions keep their denormalized
    /// `template_version` and remain readable after the template is gone.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM checklist_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `stages` table.

use comtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::stage::{CreateStage, Stage, UpdateStage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, stage_type, sort_order, created_by, created_at, updated_at";

/// Provides CRUD and reordering operations for commissioning stages.
pub struct StageRepo;

impl StageRepo {
    /// Insert a new stage for a project, returning the created row.
    ///
    /// If `sort_order` is `None`, the stage is appended after the project's
    /// current last stage.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateStage,
        created_by: &str,
    ) -> Result<Stage, sqlx::Error> {
        let query = format!(
            "INSERT INTO stages (project_id, name, stage_type, sort_order, created_by)
             VALUES (
                $1, $2, $3,
                COALESCE($4, (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM stages WHERE project_id = $1)),
                $5
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stage>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(input.stage_type.as_str())
            .bind(input.sort_order)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a stage by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stages WHERE id = $1");
        sqlx::query_as::<_, Stage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's stages ordered by `sort_order` ascending.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Stage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stages WHERE project_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Stage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a stage. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStage,
    ) -> Result<Option<Stage>, sqlx::Error> {
        let query = format!(
            "UPDATE stages SET
                name = COALESCE($2, name),
                stage_type = COALESCE($3, stage_type),
                sort_order = COALESCE($4, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stage>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.stage_type.map(|t| t.as_str()))
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a stage by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite `sort_order` to 0..n following the given id order, in one
    /// transaction. Ids not belonging to the project are ignored.
    pub async fn reorder(
        pool: &PgPool,
        project_id: DbId,
        stage_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (index, stage_id) in stage_ids.iter().enumerate() {
            sqlx::query(
                "UPDATE stages SET sort_order = $1, updated_at = NOW()
                 WHERE id = $2 AND project_id = $3",
            )
            .bind(index as i32)
            .bind(stage_id)
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

//! Repository for the `assets` table.

use comtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, CreateAsset, UpdateAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, description, asset_type, created_by, created_at, updated_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateAsset,
        created_by: &str,
    ) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (project_id, name, description, asset_type, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.asset_type)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assets ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY created_at DESC");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// List a project's assets ordered by most recently created first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update an asset. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                asset_type = COALESCE($4, asset_type),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.asset_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `components` table.

use comtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::component::{Component, CreateComponent, UpdateComponent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, asset_id, name, description, created_by, created_at, updated_at";

/// Provides CRUD operations for components.
pub struct ComponentRepo;

impl ComponentRepo {
    /// Insert a new component for an asset, returning the created row.
    pub async fn create(
        pool: &PgPool,
        asset_id: DbId,
        input: &CreateComponent,
        created_by: &str,
    ) -> Result<Component, sqlx::Error> {
        let query = format!(
            "INSERT INTO components (asset_id, name, description, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(asset_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a component by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components WHERE id = $1");
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an asset's components ordered by most recently created first.
    pub async fn list_by_asset(pool: &PgPool, asset_id: DbId) -> Result<Vec<Component>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM components WHERE asset_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(asset_id)
            .fetch_all(pool)
            .await
    }

    /// Update a component. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComponent,
    ) -> Result<Option<Component>, sqlx::Error> {
        let query = format!(
            "UPDATE components SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a component by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM components WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

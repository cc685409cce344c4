//! Repository for the `resources` table.

use learnmgr_core::learning::DEFAULT_RESOURCE_TYPE;
use learnmgr_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, url, resource_type, description, created_at, updated_at";

/// Provides read and insert operations for project resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource, returning the created row.
    ///
    /// If `resource_type` is `None` in the input, defaults to `link`.
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (project_id, title, url, resource_type, description)
             VALUES ($1, $2, $3, COALESCE($4, $6), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.resource_type)
            .bind(&input.description)
            .bind(DEFAULT_RESOURCE_TYPE)
            .fetch_one(pool)
            .await
    }

    /// List resources for a project in the order they were added.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources WHERE project_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}

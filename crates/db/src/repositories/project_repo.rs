//! Repository for the `projects` table.

use learnmgr_core::learning::DEFAULT_PUBLISH_STATUS;
use learnmgr_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status, publish_status, priority, category, \
    progress, estimated_hours, actual_hours, created_at, updated_at";

/// Correlated sub-select producing the `section_count` of a `projects` row.
const SECTION_COUNT: &str =
    "(SELECT COUNT(*) FROM sections WHERE sections.project_id = projects.id) AS section_count";

/// Provides CRUD operations for learning projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row with a section count of 0.
    ///
    /// If `publish_status` is `None` in the input, defaults to `draft`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
    ) -> Result<ProjectSummary, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, publish_status)
             VALUES ($1, $2, COALESCE($3, $4))
             RETURNING {COLUMNS}, 0::BIGINT AS section_count"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.publish_status)
            .bind(DEFAULT_PUBLISH_STATUS)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a project with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List projects newest first, each with its section count.
    ///
    /// When `publish_status` is `Some`, only projects in exactly that state
    /// are returned.
    pub async fn list(
        pool: &PgPool,
        publish_status: Option<&str>,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {SECTION_COUNT} FROM projects
             WHERE ($1::TEXT IS NULL OR publish_status = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(publish_status)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only fields present in `input` are applied.
    ///
    /// `description: Some(None)` clears the description.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                publish_status = COALESCE($5, publish_status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(description_provided)
            .bind(description_value)
            .bind(&input.publish_status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Sections, notes and resources cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

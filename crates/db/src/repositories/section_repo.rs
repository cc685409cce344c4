//! Repository for the `sections` table.

use learnmgr_core::error::CoreError;
use learnmgr_core::learning::next_section_order;
use learnmgr_core::types::DbId;
use sqlx::PgPool;

use crate::models::section::{CreateSection, Section, UpdateSection};

/// Failure modes of [`SectionRepo::create`].
#[derive(Debug, thiserror::Error)]
pub enum SectionAppendError {
    /// The next order could not be assigned (the highest sibling is at `i32::MAX`).
    #[error(transparent)]
    Order(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, content, sort_order, status, \
    estimated_hours, actual_hours, created_at, updated_at";

/// Provides CRUD and ordering operations for project sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Append a section to a project, assigning `max(sibling order) + 1`
    /// (or 0 for the first section).
    ///
    /// The parent row is locked `FOR UPDATE` for the duration of the
    /// transaction, so concurrent appends to the same project are serialized
    /// and cannot compute the same order.
    ///
    /// Returns `None` if the project does not exist. The transaction is
    /// rolled back on drop when no order can be assigned.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateSection,
    ) -> Result<Option<Section>, SectionAppendError> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
                .bind(project_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let current_max: Option<i32> =
            sqlx::query_scalar("SELECT MAX(sort_order) FROM sections WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(&mut *tx)
                .await?;
        let order = next_section_order(current_max)?;

        let query = format!(
            "INSERT INTO sections (project_id, title, content, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let section = sqlx::query_as::<_, Section>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(section))
    }

    /// Find a section by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sections for a project, ordered by `sort_order` ascending.
    ///
    /// Sections sharing an order value (possible after manual edits) fall
    /// back to creation time.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections
             WHERE project_id = $1
             ORDER BY sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a section's title, content and order.
    ///
    /// `input.order` must already be validated as present; a missing order
    /// keeps the stored value. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSection,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET
                title = $2,
                content = $3,
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a section by ID. Sibling orders are left untouched.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

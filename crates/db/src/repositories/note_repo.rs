//! Repository for the `notes` table.

use learnmgr_core::learning::DEFAULT_NOTE_TYPE;
use learnmgr_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, content, note_type, created_at, updated_at";

/// Provides read and insert operations for project notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    ///
    /// If `note_type` is `None` in the input, defaults to `general`.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (project_id, title, content, note_type)
             VALUES ($1, $2, $3, COALESCE($4, $5))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.note_type)
            .bind(DEFAULT_NOTE_TYPE)
            .fetch_one(pool)
            .await
    }

    /// List notes for a project, newest first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}

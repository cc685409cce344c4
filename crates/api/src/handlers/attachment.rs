//! Read-only handlers for records attached to a project (notes, resources).

use axum::extract::{Path, State};
use axum::Json;
use learnmgr_core::types::DbId;
use learnmgr_db::models::note::Note;
use learnmgr_db::models::resource::Resource;
use learnmgr_db::repositories::{NoteRepo, ResourceRepo};

use crate::error::AppResult;
use crate::handlers::section::ensure_project_exists;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/notes
pub async fn list_notes(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Note>>> {
    ensure_project_exists(&state, project_id).await?;
    let notes = NoteRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(notes))
}

/// GET /api/v1/projects/{id}/resources
pub async fn list_resources(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Resource>>> {
    ensure_project_exists(&state, project_id).await?;
    let resources = ResourceRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(resources))
}

//! Handlers for project sections.
//!
//! Creation and listing are scoped under `/projects/{id}/sections`; edits and
//! deletes address a section directly at `/sections/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use learnmgr_core::error::CoreError;
use learnmgr_core::learning::{normalize_optional_text, require_title, validate_section_order};
use learnmgr_core::types::DbId;
use learnmgr_db::models::section::{CreateSection, Section, UpdateSection};
use learnmgr_db::repositories::{ProjectRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DeleteResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/sections
///
/// Sections sorted by order ascending. 404 when the project does not exist.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Section>>> {
    ensure_project_exists(&state, project_id).await?;
    let sections = SectionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(sections))
}

/// POST /api/v1/projects/{id}/sections
///
/// Appends a section after the current highest order (0 for the first). A
/// 400 is returned when the highest order is already `i32::MAX`.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSection>,
) -> AppResult<(StatusCode, Json<Section>)> {
    let title = require_title(input.title.as_deref())?.to_string();

    let input = CreateSection {
        title: Some(title),
        content: normalize_optional_text(input.content.as_deref()),
    };
    let section = SectionRepo::create(&state.pool, project_id, &input)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;

    tracing::info!(
        project_id = %project_id,
        section_id = %section.id,
        order = section.order,
        "Section created",
    );

    Ok((StatusCode::CREATED, Json(section)))
}

/// PUT /api/v1/sections/{id}
///
/// Replaces `title`, `content` and `order` together. An omitted `content`
/// clears it; `order` is required.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSection>,
) -> AppResult<Json<Section>> {
    let title = require_title(input.title.as_deref())?.to_string();
    let order = input
        .order
        .ok_or_else(|| CoreError::Validation("order is required".into()))?;
    validate_section_order(order)?;

    let input = UpdateSection {
        title: Some(title),
        content: normalize_optional_text(input.content.as_deref()),
        order: Some(order),
    };
    let section = SectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Section", id))?;

    tracing::info!(section_id = %id, order, "Section updated");

    Ok(Json(section))
}

/// DELETE /api/v1/sections/{id}
///
/// Remaining siblings keep their order values.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    if !SectionRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Section", id));
    }
    tracing::info!(section_id = %id, "Section deleted");
    Ok(Json(DeleteResponse::ok()))
}

/// Return 404 unless the project exists.
pub(crate) async fn ensure_project_exists(state: &AppState, project_id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(&state.pool, project_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found("Project", project_id))
    }
}

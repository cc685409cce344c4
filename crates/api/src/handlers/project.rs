//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use learnmgr_core::learning::{
    normalize_optional_text, require_title, validate_publish_status, validate_title,
};
use learnmgr_core::types::DbId;
use learnmgr_db::models::project::{
    CreateProject, ProjectSummary, ProjectWithSections, UpdateProject,
};
use learnmgr_db::repositories::{ProjectRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::query::ProjectListParams;
use crate::response::DeleteResponse;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Requires a non-blank `title`, stored as sent. An empty `description` is
/// stored as null and a missing `publishStatus` defaults to `draft`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectSummary>)> {
    let title = require_title(input.title.as_deref())?.to_string();
    if let Some(status) = input.publish_status.as_deref() {
        validate_publish_status(status)?;
    }

    let input = CreateProject {
        title: Some(title),
        description: normalize_optional_text(input.description.as_deref()),
        publish_status: input.publish_status,
    };
    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        project_id = %project.project.id,
        publish_status = %project.project.publish_status,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Newest first. `?publishStatus=draft|published` narrows the list; without
/// it every project is returned.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<ProjectSummary>>> {
    if let Some(status) = params.publish_status.as_deref() {
        validate_publish_status(status)?;
    }
    let projects = ProjectRepo::list(&state.pool, params.publish_status.as_deref()).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithSections>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    let sections = SectionRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(ProjectWithSections { project, sections }))
}

/// PUT /api/v1/projects/{id}
///
/// Partial update: only `title`, `description` and `publishStatus` keys that
/// are present in the body are applied.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectWithSections>> {
    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }
    if let Some(status) = input.publish_status.as_deref() {
        validate_publish_status(status)?;
    }

    let input = UpdateProject {
        title: input.title,
        description: input
            .description
            .map(|d| normalize_optional_text(d.as_deref())),
        publish_status: input.publish_status,
    };
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    let sections = SectionRepo::list_by_project(&state.pool, id).await?;

    tracing::info!(project_id = %id, "Project updated");

    Ok(Json(ProjectWithSections { project, sections }))
}

/// DELETE /api/v1/projects/{id}
///
/// Sections, notes and resources are removed with the project.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Project", id));
    }
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(DeleteResponse::ok()))
}

//! Route definitions for the `/projects` resource.
//!
//! Also nests project-scoped section, note and resource listings
//! under `/projects/{id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{attachment, project, section};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                      -> list (?publishStatus=)
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
///
/// GET    /{id}/sections         -> section::list_by_project
/// POST   /{id}/sections         -> section::create
/// GET    /{id}/notes            -> attachment::list_notes
/// GET    /{id}/resources        -> attachment::list_resources
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/{id}/sections",
            get(section::list_by_project).post(section::create),
        )
        .route("/{id}/notes", get(attachment::list_notes))
        .route("/{id}/resources", get(attachment::list_resources))
}

pub mod health;
pub mod project;
pub mod section;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                         list, create
/// /projects/{id}                                    get, update, delete
/// /projects/{id}/sections                           list, create (append)
/// /projects/{id}/notes                              list
/// /projects/{id}/resources                          list
///
/// /sections/{id}                                    replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/sections", section::router())
}

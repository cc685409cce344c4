//! Route definitions for the `/sections` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::section;
use crate::state::AppState;

/// Routes mounted at `/sections`.
///
/// ```text
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(section::update).delete(section::delete))
}

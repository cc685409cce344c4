use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and its schema is current, else `degraded`.
    pub status: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Embedded migrations not yet applied; `null` when it cannot be read.
    pub pending_migrations: Option<usize>,
}

/// GET /health -- reports database reachability and schema state.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = learnmgr_db::health_check(&state.pool).await.is_ok();
    let pending_migrations = if db_healthy {
        learnmgr_db::pending_migrations(&state.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Could not read migration state"))
            .ok()
    } else {
        None
    };

    let status = if db_healthy && pending_migrations == Some(0) {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        db_healthy,
        pending_migrations,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

//! Learning resource (link, book, video, ...) entity model and DTOs.

use learnmgr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A resource row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a resource attached to a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub project_id: DbId,
    pub title: String,
    pub url: Option<String>,
    /// Defaults to `link` if omitted.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub description: Option<String>,
}

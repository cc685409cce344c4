//! Section entity model and DTOs.

use learnmgr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A section row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub content: Option<String>,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub status: String,
    pub estimated_hours: Option<f64>,
    pub actual_hours: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a section to a project.
///
/// The order is assigned by the repository, never by the caller. A missing
/// or `null` title is left for validation to reject.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSection {
    #[serde(default)]
    pub title: Option<String>,
    pub content: Option<String>,
}

/// DTO for replacing a section's title, content and order.
///
/// Unlike [`UpdateProject`](crate::models::project::UpdateProject) this is a
/// full replacement: an omitted `content` clears it. Unknown keys (clients
/// often echo the whole section back) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSection {
    #[serde(default)]
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
}

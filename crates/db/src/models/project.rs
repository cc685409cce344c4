//! Learning project entity model and DTOs.

use learnmgr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::section::Section;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub publish_status: String,
    pub priority: String,
    pub category: Option<String>,
    pub progress: i32,
    pub estimated_hours: Option<f64>,
    pub actual_hours: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with the number of sections it owns.
///
/// Returned by list and create.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub section_count: i64,
}

/// A project with its sections sorted by order ascending.
///
/// Returned by get-by-id and update.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithSections {
    #[serde(flatten)]
    pub project: Project,
    pub sections: Vec<Section>,
}

/// DTO for creating a new project.
///
/// `title` is optional here so that a missing or `null` title is reported by
/// validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to `draft` if omitted.
    pub publish_status: Option<String>,
}

/// DTO for patching an existing project. Only present fields are applied.
///
/// `description` distinguishes an absent key (keep) from `null` (clear).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::present")]
    pub description: Option<Option<String>>,
    pub publish_status: Option<String>,
}

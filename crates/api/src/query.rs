//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the project list (`?publishStatus=`).
///
/// An absent `publishStatus` lists every project regardless of state.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListParams {
    pub publish_status: Option<String>,
}

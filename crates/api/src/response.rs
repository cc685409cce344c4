//! Shared response payload types for API handlers.

use serde::Serialize;

/// Acknowledgement returned by delete endpoints: `{ "success": true }`.
///
/// Deletes report success rather than echoing the removed entity.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

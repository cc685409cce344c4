//! Value sets and validation rules for learning projects and their sections.
//!
//! Status-like columns are stored as TEXT guarded by CHECK constraints. The
//! publish state is the only one clients may write, so it is validated here
//! to answer with a 400 before the database rejects it.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Publish status
// ---------------------------------------------------------------------------

pub const PUBLISH_STATUS_DRAFT: &str = "draft";
pub const PUBLISH_STATUS_PUBLISHED: &str = "published";

/// All valid project publish states.
pub const VALID_PUBLISH_STATUSES: &[&str] = &[PUBLISH_STATUS_DRAFT, PUBLISH_STATUS_PUBLISHED];

/// Publish state assigned when a create request omits one.
pub const DEFAULT_PUBLISH_STATUS: &str = PUBLISH_STATUS_DRAFT;

// ---------------------------------------------------------------------------
// Notes and resources
// ---------------------------------------------------------------------------

/// Note type assigned when none is given.
pub const DEFAULT_NOTE_TYPE: &str = "general";

/// Resource type assigned when none is given.
pub const DEFAULT_RESOURCE_TYPE: &str = "link";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project or section title (non-empty after trimming).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".into()));
    }
    Ok(())
}

/// Require a title that may be missing from the request body.
///
/// An absent or `null` title is reported exactly like an empty one. The
/// title is returned as sent; only the check ignores surrounding whitespace.
pub fn require_title(title: Option<&str>) -> Result<&str, CoreError> {
    let title = title.unwrap_or_default();
    validate_title(title)?;
    Ok(title)
}

/// Validate a publish status against the known set.
pub fn validate_publish_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("publishStatus", status, VALID_PUBLISH_STATUSES)
}

/// Validate a section order value (must be non-negative).
pub fn validate_section_order(order: i32) -> Result<(), CoreError> {
    if order < 0 {
        return Err(CoreError::Validation(format!(
            "order must be non-negative, got {order}"
        )));
    }
    Ok(())
}

/// Validate that `value` is a member of `allowed`, naming `field` in the error.
pub fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if !allowed.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Valid values: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Collapse an optional free-text field so that an empty string is stored as
/// `NULL` rather than as `""`.
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

/// Order value for a section appended after the current highest sibling.
///
/// `current_max` is `None` when the project has no sections yet. Fails when
/// the highest sibling already holds `i32::MAX`, which can only happen after
/// an explicit reorder.
pub fn next_section_order(current_max: Option<i32>) -> Result<i32, CoreError> {
    match current_max {
        None => Ok(0),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            CoreError::Validation(format!(
                "Cannot append a section after order {max}; reorder existing sections first"
            ))
        }),
    }
}

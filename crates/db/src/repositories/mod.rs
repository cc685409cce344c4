//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod note_repo;
pub mod project_repo;
pub mod resource_repo;
pub mod section_repo;

pub use note_repo::NoteRepo;
pub use project_repo::ProjectRepo;
pub use resource_repo::ResourceRepo;
pub use section_repo::{SectionAppendError, SectionRepo};

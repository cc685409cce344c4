pub mod attachment;
pub mod project;
pub mod section;

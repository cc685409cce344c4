//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod learning;
pub mod types;

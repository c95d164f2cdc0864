//! Content loaders for reading game data from files.
//!
//! Each loader parses a data file, converts it into platformer-core types and
//! validates the result before handing it out.

pub mod config;
pub mod course;

pub use config::ConfigLoader;
pub use course::{Course, CourseLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

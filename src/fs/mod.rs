//! Filesystem module.
//!
//! Provides:
//! - Source and destination path resolution
//! - Directory creation and file copying

pub mod copy;
pub mod paths;

pub use copy::{copy_file, is_same_file};
pub use paths::{destination_path, source_path};

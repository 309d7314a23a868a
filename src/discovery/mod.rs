//! Fixture discovery.
//!
//! Provides:
//! - Search root construction from configuration
//! - Recursive fixture file scanning

pub mod roots;
pub mod walker;

pub use roots::{search_roots, RootOrigin, SearchRoot, FIXTURES_DIR, MEDIA_DIR};
pub use walker::{
    find_fixtures, is_fixture_file, scan_root, Fixture, RootScan, FIXTURE_EXTENSIONS,
};

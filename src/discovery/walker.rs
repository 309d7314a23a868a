//! Fixture file discovery.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::discovery::roots::SearchRoot;

/// Fixture file extensions picked up by discovery.
pub const FIXTURE_EXTENSIONS: &[&str] = &["json", "yaml"];

/// A fixture file together with the root it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub root: SearchRoot,
    pub path: PathBuf,
}

/// Outcome of scanning one search root.
#[derive(Debug, PartialEq, Eq)]
pub enum RootScan {
    /// The root is a directory; these fixtures were found in it.
    Found(Vec<Fixture>),
    /// The root does not exist or is not a readable directory.
    NotApplicable,
}

impl RootScan {
    /// Fixtures found, empty when the root was not applicable.
    pub fn into_fixtures(self) -> Vec<Fixture> {
        match self {
            RootScan::Found(fixtures) => fixtures,
            RootScan::NotApplicable => Vec::new(),
        }
    }
}

/// Check whether a file name has a fixture extension.
///
/// Only the last dot-separated segment counts, so `data.json.bak` is not a
/// fixture. File names need not be valid UTF-8.
pub fn is_fixture_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };

    let mut parts = name.as_encoded_bytes().rsplitn(2, |b| *b == b'.');
    match (parts.next(), parts.next()) {
        (Some(ext), Some(_)) => FIXTURE_EXTENSIONS
            .iter()
            .any(|known| known.as_bytes() == ext),
        _ => false,
    }
}

/// Recursively scan one root for fixture files.
///
/// Directories listed in `exclude` (canonical paths of other search roots)
/// are not descended into; their fixtures belong to their own root.
pub fn scan_root(root: &SearchRoot, exclude: &[PathBuf]) -> RootScan {
    let walk_path = root.walk_path();

    match std::fs::metadata(walk_path) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            tracing::debug!("Search root is not a directory: {}", walk_path.display());
            return RootScan::NotApplicable;
        }
        Err(e) => {
            tracing::debug!("Search root not available: {} ({})", walk_path.display(), e);
            return RootScan::NotApplicable;
        }
    }

    let mut fixtures = Vec::new();
    let walker = WalkDir::new(walk_path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, exclude));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", walk_path.display(), e);
                continue;
            }
        };

        if entry.file_type().is_file() && is_fixture_file(entry.path()) {
            fixtures.push(Fixture {
                root: root.clone(),
                path: entry.into_path(),
            });
        }
    }

    RootScan::Found(fixtures)
}

/// Scan every root and collect all fixtures, in root order.
pub fn find_fixtures(roots: &[SearchRoot]) -> Vec<Fixture> {
    let canonical_roots: Vec<PathBuf> = roots
        .iter()
        .filter_map(|root| std::fs::canonicalize(root.walk_path()).ok())
        .collect();

    let mut fixtures = Vec::new();
    for root in roots {
        let own = std::fs::canonicalize(root.walk_path()).ok();
        let exclude: Vec<PathBuf> = canonical_roots
            .iter()
            .filter(|path| Some(*path) != own.as_ref())
            .cloned()
            .collect();

        match scan_root(root, &exclude) {
            RootScan::Found(found) => {
                tracing::debug!(
                    "Found {} fixture(s) in {} ({})",
                    found.len(),
                    root.walk_path().display(),
                    root.origin
                );
                fixtures.extend(found);
            }
            RootScan::NotApplicable => {}
        }
    }

    fixtures
}

fn is_excluded(entry: &DirEntry, exclude: &[PathBuf]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() || exclude.is_empty() {
        return false;
    }

    std::fs::canonicalize(entry.path())
        .map(|path| exclude.contains(&path))
        .unwrap_or(false)
}

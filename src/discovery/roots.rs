//! Fixture search roots.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Name of the fixture subdirectory inside an application.
pub const FIXTURES_DIR: &str = "fixtures";

/// Name of the asset subdirectory inside a search root.
pub const MEDIA_DIR: &str = "media";

/// Where a search root came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootOrigin {
    /// The `fixtures` directory of an application.
    App(PathBuf),
    /// A directory listed in `fixtures.dirs`.
    Configured,
    /// The implicit working-directory root.
    WorkingDirectory,
}

impl fmt::Display for RootOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootOrigin::App(app) => write!(f, "app {}", app.display()),
            RootOrigin::Configured => write!(f, "configured"),
            RootOrigin::WorkingDirectory => write!(f, "working directory"),
        }
    }
}

/// A directory holding fixtures and their `media` subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    /// Root path as supplied. Empty for the working directory.
    pub path: PathBuf,
    pub origin: RootOrigin,
}

impl SearchRoot {
    /// Root contributed by an application directory.
    pub fn app(app_dir: &Path) -> Self {
        Self {
            path: app_dir.join(FIXTURES_DIR),
            origin: RootOrigin::App(app_dir.to_path_buf()),
        }
    }

    /// Root listed explicitly in the configuration.
    pub fn configured(dir: &Path) -> Self {
        Self {
            path: dir.to_path_buf(),
            origin: RootOrigin::Configured,
        }
    }

    /// The implicit working-directory root.
    pub fn working_directory() -> Self {
        Self {
            path: PathBuf::new(),
            origin: RootOrigin::WorkingDirectory,
        }
    }

    /// Path to hand to the directory walker.
    pub fn walk_path(&self) -> &Path {
        if self.path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.path
        }
    }

    /// Directory that media references of this root resolve against.
    pub fn media_dir(&self) -> PathBuf {
        self.path.join(MEDIA_DIR)
    }
}

/// Build the ordered list of search roots: application fixture directories,
/// then configured directories, then the working directory.
///
/// Roots listed more than once are kept only at their first position. Roots
/// are compared by canonical path when they exist, so `shared` and
/// `./shared` are the same root.
pub fn search_roots(config: &Config) -> Vec<SearchRoot> {
    let candidates = config
        .fixtures
        .apps
        .iter()
        .map(|app| SearchRoot::app(app))
        .chain(config.fixtures.dirs.iter().map(|dir| SearchRoot::configured(dir)))
        .chain(std::iter::once(SearchRoot::working_directory()));

    let mut roots: Vec<SearchRoot> = Vec::new();
    let mut seen: Vec<PathBuf> = Vec::new();
    for root in candidates {
        let key = std::fs::canonicalize(root.walk_path())
            .unwrap_or_else(|_| root.walk_path().to_path_buf());
        if seen.contains(&key) {
            tracing::debug!("Skipping duplicate search root: {}", root.walk_path().display());
            continue;
        }
        seen.push(key);
        roots.push(root);
    }

    roots
}

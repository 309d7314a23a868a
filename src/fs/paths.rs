//! Path resolution and directory management.

use std::path::{Path, PathBuf};

use crate::discovery::SearchRoot;
use crate::media::MediaReference;

/// Get the staging path of a reference: `<root>/media/<reference>`.
pub fn source_path(root: &SearchRoot, reference: &MediaReference) -> PathBuf {
    root.media_dir().join(reference.relative_path())
}

/// Get the live path of a reference: `<media root>/<reference>`.
pub fn destination_path(media_root: &Path, reference: &MediaReference) -> PathBuf {
    media_root.join(reference.relative_path())
}

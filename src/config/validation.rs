//! Configuration validation logic.

use std::path::Path;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_media_root(config.media_root()?)?;

    for dir in config.fixtures.apps.iter().chain(&config.fixtures.dirs) {
        validate_search_dir(dir)?;
    }

    Ok(())
}

/// Validate the media destination root.
pub fn validate_media_root(root: &Path) -> Result<()> {
    if root.as_os_str().is_empty() {
        return Err(Error::MissingConfig("media.root".to_string()));
    }

    if !root.is_absolute() {
        return Err(Error::ConfigValidation {
            field: "media.root".to_string(),
            message: format!("Media root must be an absolute path (got {})", root.display()),
        });
    }

    if root.exists() && !root.is_dir() {
        return Err(Error::ConfigValidation {
            field: "media.root".to_string(),
            message: format!("Media root is not a directory: {}", root.display()),
        });
    }

    Ok(())
}

/// Validate an application or fixture directory entry.
///
/// Directories that do not exist are allowed; discovery skips them.
pub fn validate_search_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "fixtures".to_string(),
            message: "Fixture directories cannot be empty; the working directory is always searched"
                .to_string(),
        });
    }

    Ok(())
}

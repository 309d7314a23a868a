//! Configuration structures and loading logic.

use crate::config::modes::ReferenceMode;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fixture-media.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub fixtures: FixturesConfig,
}

/// Media destination configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaConfig {
    /// Absolute directory that receives the copied files.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Only recognise references carrying the `media://` prefix.
    #[serde(default)]
    pub require_prefix: bool,
}

/// Fixture search configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixturesConfig {
    /// Application directories; each contributes its `fixtures` subdirectory.
    #[serde(default)]
    pub apps: Vec<PathBuf>,

    /// Additional fixture directories searched as-is.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Reference matching mode selected by `media.require_prefix`.
    pub fn reference_mode(&self) -> ReferenceMode {
        ReferenceMode::from_require_prefix(self.media.require_prefix)
    }

    /// Get the configured media root or fail if it was never set.
    pub fn media_root(&self) -> Result<&Path> {
        self.media
            .root
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("media.root".to_string()))
    }
}

//! Media reference representation.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// A media path found in fixture text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    /// The text exactly as it appeared in the fixture.
    raw: String,

    /// Normalized relative path built from the separator-split segments.
    relative: PathBuf,
}

impl MediaReference {
    /// Parse an extracted reference into a safe relative path.
    ///
    /// Both `/` and `\` act as separators and repeated separators collapse.
    /// Absolute references and `.`/`..` segments are rejected so the
    /// resolved paths can never leave the media directories.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.starts_with(['/', '\\']) {
            return Err(invalid(raw, "absolute paths are not allowed"));
        }

        if raw.contains('\0') {
            return Err(invalid(raw, "null bytes are not allowed"));
        }

        let mut relative = PathBuf::new();
        for segment in raw.split(['/', '\\']).filter(|s| !s.is_empty()) {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => relative.push(part),
                _ => {
                    return Err(invalid(
                        raw,
                        &format!("segment '{}' is not a plain name", segment),
                    ))
                }
            }
        }

        if relative.as_os_str().is_empty() {
            return Err(invalid(raw, "reference is empty"));
        }

        Ok(Self {
            raw: raw.to_string(),
            relative,
        })
    }

    /// The reference as written in the fixture.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The normalized relative path.
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }
}

impl fmt::Display for MediaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn invalid(raw: &str, message: &str) -> Error {
    Error::InvalidReference {
        reference: raw.to_string(),
        message: message.to_string(),
    }
}

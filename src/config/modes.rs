//! Reference matching mode definitions.

use std::fmt;

/// How strictly media references are recognised in fixture text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMode {
    /// Match paths with or without the `media://` prefix (default).
    #[default]
    Permissive,
    /// Only match paths carrying the `media://` prefix.
    Strict,
}

impl ReferenceMode {
    /// Select the mode from the `require_prefix` toggle.
    pub fn from_require_prefix(require_prefix: bool) -> Self {
        if require_prefix {
            ReferenceMode::Strict
        } else {
            ReferenceMode::Permissive
        }
    }
}

impl fmt::Display for ReferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceMode::Permissive => write!(f, "permissive"),
            ReferenceMode::Strict => write!(f, "strict"),
        }
    }
}

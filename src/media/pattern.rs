//! Media reference patterns.
//!
//! A reference is a relative file path with at least one separator and a
//! trailing extension. It is recognised either as a double-quoted string
//! anywhere on a line (JSON values) or as an unquoted token ending the line
//! (YAML scalars). No match ever spans a line break, so scanning a whole file
//! and scanning it line by line give the same result.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ReferenceMode;

/// Scheme marker that may precede a reference.
pub const MEDIA_SCHEME: &str = "media://";

const PERMISSIVE_PATTERN: &str = r#"(?m)"(?:media://)?([^"\r\n]+?[/\\]+[^"\r\n]+?\.[^."/\\\s]+)"|(?:media://)?([^"\s]+?[/\\]+[^"\s]+?\.[^."/\\\s]+)\r?$"#;

const STRICT_PATTERN: &str = r#"(?m)"media://([^"\r\n]+?[/\\]+[^"\r\n]+?\.[^."/\\\s]+)"|media://([^"\s]+?[/\\]+[^"\s]+?\.[^."/\\\s]+)\r?$"#;

static PERMISSIVE: OnceLock<Regex> = OnceLock::new();
static STRICT: OnceLock<Regex> = OnceLock::new();

/// Compiled reference pattern for one [`ReferenceMode`].
#[derive(Debug, Clone, Copy)]
pub struct ReferencePattern {
    mode: ReferenceMode,
    regex: &'static Regex,
}

impl ReferencePattern {
    /// Get the pattern for a matching mode.
    pub fn new(mode: ReferenceMode) -> Self {
        let regex = match mode {
            ReferenceMode::Permissive => PERMISSIVE.get_or_init(|| compile(PERMISSIVE_PATTERN)),
            ReferenceMode::Strict => STRICT.get_or_init(|| compile(STRICT_PATTERN)),
        };
        Self { mode, regex }
    }

    /// The mode this pattern was built for.
    pub fn mode(&self) -> ReferenceMode {
        self.mode
    }

    /// Find all references in `text`, in textual order, duplicates included.
    ///
    /// Quotes and the `media://` marker are stripped from the results.
    pub fn find_references<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
            // The optional marker can backtrack into the path when nothing after
            // it has a separator; such a candidate is not a reference.
            .filter(|path| !path.starts_with(MEDIA_SCHEME))
            .collect()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("reference pattern is a valid regex")
}

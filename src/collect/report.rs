//! Per-reference progress reporting.

use std::fmt;
use std::path::Path;

use crate::error::Error;
use crate::media::MediaReference;
use crate::output::{print_info, print_success, print_warning};

/// Something that happened to one media reference.
#[derive(Debug)]
pub enum Notice<'a> {
    Copied {
        reference: &'a MediaReference,
        destination: &'a Path,
    },
    WouldCopy {
        reference: &'a MediaReference,
        destination: &'a Path,
    },
    Missing {
        reference: &'a MediaReference,
        fixture: &'a Path,
        source: &'a Path,
    },
    SameFile {
        reference: &'a MediaReference,
        path: &'a Path,
    },
    Rejected {
        error: &'a Error,
        fixture: &'a Path,
    },
}

impl Notice<'_> {
    /// Whether the reference was skipped instead of copied.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Notice::Missing { .. } | Notice::SameFile { .. } | Notice::Rejected { .. }
        )
    }
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Copied {
                reference,
                destination,
            } => write!(f, "Copied {} to {}", reference, destination.display()),
            Notice::WouldCopy {
                reference,
                destination,
            } => write!(f, "Would copy {} to {}", reference, destination.display()),
            Notice::Missing {
                reference,
                fixture,
                source,
            } => write!(
                f,
                "File path ({}) found in {} but not on disk in ({})",
                reference,
                fixture.display(),
                source.display()
            ),
            Notice::SameFile { reference, path } => write!(
                f,
                "Skipping {}: source and destination are the same file ({})",
                reference,
                path.display()
            ),
            Notice::Rejected { error, fixture } => {
                write!(f, "{} (in {})", error, fixture.display())
            }
        }
    }
}

/// Receiver of collection notices.
pub trait Report {
    fn notice(&mut self, notice: &Notice<'_>);
}

/// Styled terminal output; prints nothing when quiet.
#[derive(Debug, Default)]
pub struct ConsoleReport {
    quiet: bool,
}

impl ConsoleReport {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Report for ConsoleReport {
    fn notice(&mut self, notice: &Notice<'_>) {
        if self.quiet {
            return;
        }

        let message = notice.to_string();
        match notice {
            Notice::Copied { .. } => print_success(&message),
            Notice::WouldCopy { .. } => print_info(&message),
            _ => print_warning(&message),
        }
    }
}

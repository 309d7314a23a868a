//! Media reference extraction.

pub mod pattern;
pub mod reference;

pub use pattern::{ReferencePattern, MEDIA_SCHEME};
pub use reference::MediaReference;

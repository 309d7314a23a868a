//! Collect module for copying fixture media.
//!
//! This module provides:
//! - The up-front overwrite confirmation
//! - Per-fixture reference extraction and copying
//! - Per-reference notices
//! - Run statistics

pub mod collector;
pub mod confirm;
pub mod report;
pub mod state;

pub use collector::{CollectOptions, MediaCollector};
pub use confirm::{is_affirmative, Confirm, PromptConfirm, OVERWRITE_PROMPT};
pub use report::{ConsoleReport, Notice, Report};
pub use state::CollectStats;

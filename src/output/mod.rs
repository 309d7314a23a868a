//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Discovery spinner
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{print_config_summary, print_error, print_info, print_success, print_warning};
pub use progress::create_spinner;
pub use stats::{print_collect_stats, print_summary};

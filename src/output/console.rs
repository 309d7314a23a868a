//! Console output utilities.

use console::style;

use crate::config::Config;
use crate::discovery::search_roots;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config) {
    let media_root = config
        .media
        .root
        .as_ref()
        .map(|root| root.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Media root: {}", media_root);
    println!("  References: {}", config.reference_mode());
    println!("  Search roots:");
    for root in search_roots(config) {
        println!("    {} ({})", root.walk_path().display(), root.origin);
    }
    println!();
}

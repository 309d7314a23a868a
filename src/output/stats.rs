//! Statistics reporting.

use console::style;

use crate::collect::CollectStats;

/// Print the totals of a collection run.
pub fn print_collect_stats(stats: &CollectStats, dry_run: bool) {
    let copied_label = if dry_run { "To copy:" } else { "Copied: " };

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Media Statistics:").bold());
    println!("  Fixtures:   {}", stats.fixtures_scanned);
    println!("  References: {}", stats.references_found);
    println!(
        "  {}   {} ({} bytes)",
        copied_label,
        style(stats.files_copied).green(),
        stats.bytes_copied
    );
    if stats.missing_sources > 0 {
        println!("  Missing:    {}", style(stats.missing_sources).yellow());
    }
    if stats.same_file > 0 {
        println!("  Unchanged:  {} (already in media root)", style(stats.same_file).yellow());
    }
    if stats.rejected_references > 0 {
        println!("  Rejected:   {}", style(stats.rejected_references).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}

/// Print a summary line for quick viewing.
pub fn print_summary(stats: &CollectStats) {
    println!(
        "Copied: {} files ({} skipped)",
        style(stats.files_copied).green(),
        style(stats.total_skipped()).yellow()
    );
}

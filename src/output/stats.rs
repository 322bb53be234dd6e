//! Statistics reporting.

use console::style;

use crate::dedup::RunStats;
use crate::output::console::format_bytes;

/// Print the end-of-run summary.
pub fn print_summary(stats: &RunStats) {
    println!();
    println!("{}", style("Summary:").bold());
    println!("  Kept:      {}", stats.kept);
    println!("  Removed:   {}", style(stats.removed).green());
    if stats.failed > 0 {
        println!("  Failed:    {}", style(stats.failed).red());
    }
    println!("  Ignored:   {}", stats.ignored);
    println!("  Reclaimed: {}", format_bytes(stats.bytes_reclaimed));
}

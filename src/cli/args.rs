//! Command-line argument definitions using clap.

use clap::Parser;

/// Roam Research backup deduplicator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "roam-backup-dedup",
    version,
    about = "Remove consecutive duplicate Roam Research backups",
    long_about = "Scans ~/Library/Application Support/Roam Research/backups/Duh-Uh and removes \
                  every backup identical (same size and SHA-256) to the backup kept before it."
)]
pub struct Args {
    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Default log filter directive.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

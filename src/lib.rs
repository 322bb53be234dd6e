//! Roam Backup Dedup - removes consecutive duplicate Roam Research backups
//!
//! Backups are listed in name order and each one is compared with the last
//! backup that was kept. When size and SHA-256 checksum both match, the newer
//! file is deleted.
//!
//! # Example
//!
//! ```no_run
//! use roam_backup_dedup::{dedupe_backups, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let stats = dedupe_backups(&config)?;
//!     println!("removed {} backups", stats.removed);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use dedup::{dedupe_backups, Action, Checksum, Deduplicator, RunState, RunStats};
pub use error::{Error, Result};
pub use fs::BackupEntry;

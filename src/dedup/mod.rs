//! Deduplication module.
//!
//! Provides:
//! - Streaming SHA-256 file checksums
//! - Last-retained-backup tracking
//! - Adjacent duplicate removal

pub mod hash;
pub mod service;
pub mod state;

pub use hash::{checksum, Checksum};
pub use service::{dedupe_backups, Action, Deduplicator};
pub use state::{RunState, RunStats};

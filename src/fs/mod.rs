//! Filesystem module.
//!
//! Provides:
//! - Home and backup directory resolution
//! - Backup directory listing
//! - File removal

pub mod listing;
pub mod paths;
pub mod remove;

pub use listing::{list_backups, BackupEntry};
pub use paths::{backup_dir, home_dir};
pub use remove::{FsRemover, Remover};

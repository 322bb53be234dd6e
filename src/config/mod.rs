//! Configuration module for roam-backup-dedup.
//!
//! The backup location and filename prefix are fixed; they are held in a
//! [`Config`] built once at startup so that tests can point the scan at a
//! scratch directory.

pub mod loader;

pub use loader::{Config, BACKUP_PATH, BACKUP_PREFIX};

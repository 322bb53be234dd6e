//! Configuration structure and startup construction.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::{backup_dir, home_dir};

/// Backup directory, relative to the user's home directory.
pub const BACKUP_PATH: &str = "Library/Application Support/Roam Research/backups/Duh-Uh";

/// Only files whose name starts with this prefix are considered backups.
pub const BACKUP_PREFIX: &str = "backup-Duh-Uh-";

/// Runtime configuration, immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the backups.
    pub backup_directory: PathBuf,

    /// Required filename prefix.
    pub backup_prefix: String,
}

impl Config {
    /// Build a configuration for an explicit directory and prefix.
    pub fn new(backup_directory: impl Into<PathBuf>, backup_prefix: impl Into<String>) -> Self {
        Self {
            backup_directory: backup_directory.into(),
            backup_prefix: backup_prefix.into(),
        }
    }

    /// Build the default configuration rooted at the given home directory.
    pub fn from_home(home: &Path) -> Self {
        Self::new(backup_dir(home), BACKUP_PREFIX)
    }

    /// Resolve the current user's home directory and build the default configuration.
    pub fn load() -> Result<Self> {
        let home = home_dir()?;
        Ok(Self::from_home(&home))
    }

    /// Whether a directory entry name is a backup this tool should consider.
    pub fn matches_prefix(&self, name: &str) -> bool {
        name.starts_with(&self.backup_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_home() {
        let config = Config::from_home(Path::new("/Users/someone"));
        assert_eq!(
            config.backup_directory,
            PathBuf::from("/Users/someone/Library/Application Support/Roam Research/backups/Duh-Uh")
        );
        assert_eq!(config.backup_prefix, "backup-Duh-Uh-");
    }

    #[test]
    fn test_matches_prefix() {
        let config = Config::new("/tmp/backups", BACKUP_PREFIX);
        assert!(config.matches_prefix("backup-Duh-Uh-2024-01-01.zip"));
        assert!(config.matches_prefix("backup-Duh-Uh-"));
        assert!(!config.matches_prefix("other-file"));
        assert!(!config.matches_prefix("Backup-Duh-Uh-001"));
        assert!(!config.matches_prefix(".backup-Duh-Uh-001"));
    }
}

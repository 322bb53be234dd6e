//! Home and backup directory resolution.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::config::BACKUP_PATH;
use crate::error::{Error, Result};

/// Resolve the current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(Error::HomeDir)
}

/// Get the backup directory under a home directory.
pub fn backup_dir(home: &Path) -> PathBuf {
    home.join(BACKUP_PATH)
}

//! Backup directory listing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// One entry of the backup directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    /// File name within the backup directory.
    pub name: String,
    /// Size in bytes, as reported by the listing (symlinks are not followed).
    pub size: u64,
    /// Full path to the entry.
    pub path: PathBuf,
}

/// List every entry of `dir`, sorted by file name.
///
/// Any failure to read the directory or an entry's metadata is fatal.
pub fn list_backups(dir: &Path) -> Result<Vec<BackupEntry>> {
    let list_err = |source| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let metadata = entry.metadata().map_err(list_err)?;

        entries.push(BackupEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            path: entry.path(),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Listed {} entries in {}", entries.len(), dir.display());

    Ok(entries)
}

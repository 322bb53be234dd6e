//! File removal.

use std::io;
use std::path::Path;

/// Removes files identified as duplicates.
pub trait Remover {
    fn remove(&mut self, path: &Path) -> io::Result<()>;
}

/// Removes files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&mut self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_remover() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup-Duh-Uh-001");
        std::fs::write(&path, b"data").unwrap();

        FsRemover.remove(&path).unwrap();
        assert!(!path.exists());

        // Second removal fails, the file is already gone
        assert!(FsRemover.remove(&path).is_err());
    }
}

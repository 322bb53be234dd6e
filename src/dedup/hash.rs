//! File hashing for deduplication.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Read buffer size for streaming hashes.
const BUFFER_SIZE: usize = 8192;

/// SHA-256 digest of a file's full contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum([u8; 32]);

impl Checksum {
    /// Compute the checksum of an in-memory buffer.
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Compute the SHA-256 checksum of a file, streaming its contents.
///
/// Failing to open or read the file is fatal for the run.
pub fn checksum(path: &Path) -> Result<Checksum> {
    let checksum_err = |source| Error::Checksum {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(checksum_err)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; BUFFER_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(checksum_err)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(Checksum(hasher.finalize().into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_vectors() {
        let dir = tempfile::tempdir().unwrap();

        let abc = dir.path().join("abc");
        std::fs::write(&abc, b"abc").unwrap();
        assert_eq!(
            checksum(&abc).unwrap().to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );

        let empty = dir.path().join("empty");
        std::fs::write(&empty, b"").unwrap();
        assert_eq!(
            checksum(&empty).unwrap().to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_checksum_spans_buffer_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("large");
        let data: Vec<u8> = (0..BUFFER_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).unwrap();

        assert_eq!(checksum(&path).unwrap(), Checksum::of_bytes(&data));
    }

    #[test]
    fn test_checksum_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        match checksum(&path) {
            Err(Error::Checksum { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected Checksum error, got {:?}", other),
        }
    }

    #[test]
    fn test_checksum_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(checksum(dir.path()).is_err());
    }
}

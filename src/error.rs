//! Error types for roam-backup-dedup.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
///
/// Every variant is fatal: the run stops at the first one. A failed removal
/// of a duplicate is not an error here, it is reported through
/// [`crate::dedup::Action::RemoveFailed`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not resolve the home directory")]
    HomeDir,

    #[error("Could not read backup directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error calculating checksum: {}: {source}", .path.display())]
    Checksum {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::HomeDir => exit_codes::HOME_DIR_ERROR,
            Error::ListDir { .. } => exit_codes::LIST_ERROR,
            Error::Checksum { .. } => exit_codes::CHECKSUM_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const HOME_DIR_ERROR: i32 = 2;
    pub const LIST_ERROR: i32 = 3;
    pub const CHECKSUM_ERROR: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_nonzero_for_errors() {
        let not_found = || std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

        assert_eq!(Error::HomeDir.exit_code(), exit_codes::HOME_DIR_ERROR);
        assert_eq!(
            Error::ListDir {
                path: PathBuf::from("/nope"),
                source: not_found(),
            }
            .exit_code(),
            exit_codes::LIST_ERROR
        );
        assert_eq!(
            Error::Checksum {
                path: PathBuf::from("/nope/file"),
                source: not_found(),
            }
            .exit_code(),
            exit_codes::CHECKSUM_ERROR
        );
    }

    #[test]
    fn test_checksum_error_message_names_file() {
        let err = Error::Checksum {
            path: PathBuf::from("/backups/backup-Duh-Uh-001"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("backup-Duh-Uh-001"));
        assert!(message.contains("denied"));
    }
}

//! Scan state and statistics.

use crate::dedup::hash::Checksum;

/// Size and checksum of the last retained backup.
///
/// Starts empty so the first backup never matches. Only advanced when a
/// backup is kept; removed backups and failed removals leave it untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunState {
    last_size: Option<u64>,
    last_checksum: Option<Checksum>,
}

impl RunState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a file with this size and checksum duplicates the last retained one.
    pub fn is_duplicate(&self, size: u64, checksum: &Checksum) -> bool {
        self.last_size == Some(size) && self.last_checksum.as_ref() == Some(checksum)
    }

    /// Record a retained file as the new comparison baseline.
    pub fn retain(&mut self, size: u64, checksum: Checksum) {
        self.last_size = Some(size);
        self.last_checksum = Some(checksum);
    }

    pub fn last_size(&self) -> Option<u64> {
        self.last_size
    }

    pub fn last_checksum(&self) -> Option<&Checksum> {
        self.last_checksum.as_ref()
    }
}

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub ignored: u64,
    pub kept: u64,
    pub removed: u64,
    pub failed: u64,
    pub bytes_reclaimed: u64,
}

impl RunStats {
    pub fn increment_ignored(&mut self) {
        self.ignored += 1;
    }

    pub fn increment_kept(&mut self) {
        self.kept += 1;
    }

    pub fn record_removed(&mut self, size: u64) {
        self.removed += 1;
        self.bytes_reclaimed += size;
    }

    pub fn increment_failed(&mut self) {
        self.failed += 1;
    }

    /// Number of entries that matched the prefix and were hashed.
    pub fn total_hashed(&self) -> u64 {
        self.kept + self.removed + self.failed
    }
}

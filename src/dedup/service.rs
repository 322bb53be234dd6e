//! Adjacent-duplicate removal.
//!
//! Each backup is compared only with the last backup that was kept. A backup
//! with the same size and checksum is removed; anything else becomes the new
//! baseline.

use tracing::{error, info};

use crate::config::Config;
use crate::dedup::hash::{checksum, Checksum};
use crate::dedup::state::{RunState, RunStats};
use crate::error::Result;
use crate::fs::{list_backups, BackupEntry, FsRemover, Remover};

/// What happened to one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Name did not match the backup prefix.
    Ignored,
    /// Backup kept and recorded as the new baseline.
    Kept(Checksum),
    /// Backup duplicated the previous one and was removed.
    Removed(Checksum),
    /// Backup duplicated the previous one but could not be removed.
    RemoveFailed(Checksum),
}

/// Single-pass deduplicator over a backup directory listing.
#[derive(Debug)]
pub struct Deduplicator<R = FsRemover> {
    config: Config,
    remover: R,
    state: RunState,
    stats: RunStats,
}

impl Deduplicator<FsRemover> {
    /// Create a deduplicator that removes files from disk.
    pub fn new(config: Config) -> Self {
        Self::with_remover(config, FsRemover)
    }
}

impl<R: Remover> Deduplicator<R> {
    /// Create a deduplicator with a custom remover.
    pub fn with_remover(config: Config, remover: R) -> Self {
        Self {
            config,
            remover,
            state: RunState::new(),
            stats: RunStats::default(),
        }
    }

    /// Process one entry against the current state.
    ///
    /// Returns an error only when the entry cannot be hashed. A failed
    /// removal is logged and reported as [`Action::RemoveFailed`].
    pub fn process_entry(&mut self, entry: &BackupEntry) -> Result<Action> {
        if !self.config.matches_prefix(&entry.name) {
            info!("Ignoring {}", entry.name);
            self.stats.increment_ignored();
            return Ok(Action::Ignored);
        }

        let sum = checksum(&entry.path)?;

        if self.state.is_duplicate(entry.size, &sum) {
            info!("Removing: {}: {}", entry.name, sum);
            return match self.remover.remove(&entry.path) {
                Ok(()) => {
                    self.stats.record_removed(entry.size);
                    Ok(Action::Removed(sum))
                }
                Err(e) => {
                    error!("Error removing file: {}: {}", entry.path.display(), e);
                    self.stats.increment_failed();
                    Ok(Action::RemoveFailed(sum))
                }
            };
        }

        self.state.retain(entry.size, sum);
        self.stats.increment_kept();
        info!("Keeping: {}: {}", entry.name, sum);

        Ok(Action::Kept(sum))
    }

    /// Process entries in order, stopping at the first fatal error.
    pub fn run<'a, I>(&mut self, entries: I) -> Result<RunStats>
    where
        I: IntoIterator<Item = &'a BackupEntry>,
    {
        for entry in entries {
            self.process_entry(entry)?;
        }
        Ok(self.stats)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn remover(&self) -> &R {
        &self.remover
    }
}

/// List the configured backup directory and remove adjacent duplicates.
pub fn dedupe_backups(config: &Config) -> Result<RunStats> {
    info!("Scanning {}", config.backup_directory.display());
    let entries = list_backups(&config.backup_directory)?;
    Deduplicator::new(config.clone()).run(&entries)
}

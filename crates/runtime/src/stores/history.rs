//! Bounded log of generation results.

use std::sync::Arc;

use game_core::AiHistoryEntry;

use super::{read_record, write_record};
use crate::repository::{RecordKey, RecordRepository};

/// Default number of entries kept in the history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Most-recent-first log of generated levels, capped at `capacity` entries.
///
/// Entries are never deduplicated: every successful generation adds one.
pub struct HistoryStore {
    repo: Arc<dyn RecordRepository>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(repo: Arc<dyn RecordRepository>, capacity: usize) -> Self {
        Self {
            repo,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read the persisted history, most recent first.
    pub fn load_all(&self) -> Vec<AiHistoryEntry> {
        read_record(self.repo.as_ref(), RecordKey::AiHistory).unwrap_or_default()
    }

    /// Prepend `entry`, drop everything past the cap, and persist.
    pub fn append(&self, entry: AiHistoryEntry) {
        let mut history = self.load_all();
        history.insert(0, entry);
        history.truncate(self.capacity);

        write_record(self.repo.as_ref(), RecordKey::AiHistory, &history);
        tracing::debug!("History now holds {} entries", history.len());
    }
}

//! In-memory record repository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{RecordKey, RecordRepository, RepositoryError, Result};

/// In-memory record repository for testing and development.
///
/// Thread-safe but not persistent across process restarts.
#[derive(Default)]
pub struct InMemoryRecordRepository {
    records: RwLock<HashMap<RecordKey, String>>,
}

impl InMemoryRecordRepository {
    /// Create a new empty in-memory record repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with raw records.
    pub fn with_records<'a>(records: impl IntoIterator<Item = (RecordKey, &'a str)>) -> Self {
        let records = records
            .into_iter()
            .map(|(key, json)| (key, json.to_string()))
            .collect();

        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn load(&self, key: RecordKey) -> Result<Option<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(records.get(&key).cloned())
    }

    fn save(&self, key: RecordKey, json: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        records.insert(key, json.to_string());
        Ok(())
    }

    fn delete(&self, key: RecordKey) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        records.remove(&key);
        Ok(())
    }
}

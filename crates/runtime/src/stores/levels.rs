//! Persisted collection of custom levels.

use std::sync::Arc;

use game_core::LevelData;

use super::{read_record, write_record};
use crate::repository::{RecordKey, RecordRepository};

/// Ordered collection of user-authored and generated levels.
///
/// Built-in levels never enter this store; they are merged in front of the
/// custom levels only when presenting the level list.
pub struct LevelStore {
    repo: Arc<dyn RecordRepository>,
    levels: Vec<LevelData>,
}

impl LevelStore {
    /// Create a store and load the persisted collection.
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        let levels = read_record(repo.as_ref(), RecordKey::CustomLevels).unwrap_or_default();
        Self { repo, levels }
    }

    /// Read the persisted collection; absence or malformed data yields an empty list.
    pub fn load_all(&self) -> Vec<LevelData> {
        read_record(self.repo.as_ref(), RecordKey::CustomLevels).unwrap_or_default()
    }

    /// Levels as of the last load or upsert.
    pub fn levels(&self) -> &[LevelData] {
        &self.levels
    }

    pub fn get(&self, id: &str) -> Option<&LevelData> {
        self.levels.iter().find(|level| level.id == id)
    }

    /// Insert or replace a level by id and persist the collection.
    ///
    /// A level whose id is already stored replaces that entry in place;
    /// otherwise it is appended. Levels without a custom id are refused,
    /// leaving the collection untouched.
    pub fn upsert(&mut self, level: LevelData) -> &[LevelData] {
        if !level.is_custom() {
            tracing::warn!("Refusing to persist non-custom level '{}'", level.id);
            return &self.levels;
        }

        match self.levels.iter().position(|stored| stored.id == level.id) {
            Some(index) => {
                tracing::debug!("Replacing custom level '{}' at {}", level.id, index);
                self.levels[index] = level;
            }
            None => {
                tracing::debug!("Appending custom level '{}'", level.id);
                self.levels.push(level);
            }
        }

        write_record(self.repo.as_ref(), RecordKey::CustomLevels, &self.levels);
        &self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRecordRepository;
    use game_core::{Difficulty, GameObject, ObjectKind};

    fn level(id: &str, name: &str) -> LevelData {
        LevelData::new(
            id,
            name,
            Difficulty::Easy,
            vec![GameObject::new("o1", ObjectKind::Spike, 600.0, 360.0)],
        )
    }

    fn empty_store() -> LevelStore {
        LevelStore::new(Arc::new(InMemoryRecordRepository::new()))
    }

    #[test]
    fn upsert_appends_new_ids() {
        let mut store = empty_store();
        store.upsert(level("custom-1", "One"));
        store.upsert(level("custom-2", "Two"));

        let ids: Vec<_> = store.levels().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["custom-1", "custom-2"]);
        assert_eq!(store.load_all(), store.levels());
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut store = empty_store();
        store.upsert(level("custom-1", "One"));
        store.upsert(level("custom-2", "Two"));
        store.upsert(level("custom-3", "Three"));

        store.upsert(level("custom-2", "Two (edited)"));

        let names: Vec<_> = store.levels().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["One", "Two (edited)", "Three"]);
        assert_eq!(store.load_all().len(), 3);
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut once = empty_store();
        once.upsert(level("custom-1", "One"));

        let mut twice = empty_store();
        twice.upsert(level("custom-1", "One"));
        twice.upsert(level("custom-1", "One"));

        assert_eq!(once.levels(), twice.levels());
        assert_eq!(once.load_all(), twice.load_all());
    }

    #[test]
    fn builtin_ids_are_refused() {
        let mut store = empty_store();
        store.upsert(level("1", "Puppet Genesis"));
        assert!(store.levels().is_empty());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn malformed_record_loads_empty() {
        let repo = InMemoryRecordRepository::with_records([(RecordKey::CustomLevels, "[{\"id\":")]);
        let store = LevelStore::new(Arc::new(repo));
        assert!(store.levels().is_empty());
    }
}

//! Repository contract for the string-keyed records the game persists.

use strum::{EnumIter, IntoStaticStr};

use super::error::Result;

/// Keys of the persisted records.
///
/// Every record is a whole JSON document owned by exactly one store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum RecordKey {
    /// `UserSettings`, written by `SettingsStore`.
    #[strum(serialize = "puppet_dash_settings")]
    Settings,
    /// Ordered custom levels, written by `LevelStore`.
    #[strum(serialize = "puppet_dash_levels")]
    CustomLevels,
    /// Bounded generation history, written by `HistoryStore`.
    #[strum(serialize = "puppet_dash_ai_history")]
    AiHistory,
}

impl RecordKey {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Storage for JSON-encoded records.
///
/// Writes are whole-value overwrites (last writer wins); there is no partial
/// or field-level update.
pub trait RecordRepository: Send + Sync {
    /// Load the raw JSON stored under `key`, or `None` if nothing was stored.
    fn load(&self, key: RecordKey) -> Result<Option<String>>;

    /// Replace the record stored under `key`.
    fn save(&self, key: RecordKey, json: &str) -> Result<()>;

    /// Remove the record stored under `key`. Missing records are not an error.
    fn delete(&self, key: RecordKey) -> Result<()>;

    /// Check if a record exists.
    fn exists(&self, key: RecordKey) -> bool {
        matches!(self.load(key), Ok(Some(_)))
    }
}

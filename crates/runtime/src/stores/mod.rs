//! Typed stores over the record repository.
//!
//! Each store owns exactly one [`RecordKey`] and is its only writer. Reads
//! never fail from the caller's point of view: a missing record or one that
//! does not decode falls back to the store's empty/default value, and the
//! decode failure is logged for diagnostics only. Writes are logged on
//! failure and otherwise invisible to the caller.

mod history;
mod levels;
mod settings;

pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryStore};
pub use levels::LevelStore;
pub use settings::SettingsStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::{RecordKey, RecordRepository, RepositoryError};

/// Read and decode a record, treating absence and malformed data alike.
fn read_record<T>(repo: &dyn RecordRepository, key: RecordKey) -> Option<T>
where
    T: DeserializeOwned,
{
    let json = match repo.load(key) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read record '{}': {}", key.as_str(), e);
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            let error = RepositoryError::Json {
                key: key.as_str(),
                message: e.to_string(),
            };
            tracing::warn!("Discarding unreadable record: {}", error);
            None
        }
    }
}

/// Encode and overwrite a record. Failures are logged, not returned.
fn write_record<T>(repo: &dyn RecordRepository, key: RecordKey, value: &T)
where
    T: Serialize + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to encode record '{}': {}", key.as_str(), e);
            return;
        }
    };

    if let Err(e) = repo.save(key, &json) {
        tracing::error!("Failed to persist record '{}': {}", key.as_str(), e);
    }
}

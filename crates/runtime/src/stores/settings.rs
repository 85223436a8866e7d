//! Persisted user preferences.

use std::sync::Arc;

use game_core::UserSettings;

use super::{read_record, write_record};
use crate::repository::{RecordKey, RecordRepository};

/// Loads, validates, and saves [`UserSettings`].
///
/// The store also holds the current value so every mutation is observable
/// immediately; there is no batching between a change and its write.
pub struct SettingsStore {
    repo: Arc<dyn RecordRepository>,
    current: UserSettings,
}

impl SettingsStore {
    /// Create a store and load the persisted settings.
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        let current = Self::read(repo.as_ref());
        Self { repo, current }
    }

    /// Read the persisted settings.
    ///
    /// Returns the defaults when nothing is stored or the record does not
    /// decode; missing fields are backfilled and values are normalized.
    pub fn load(&self) -> UserSettings {
        Self::read(self.repo.as_ref())
    }

    /// Settings as of the last load or save.
    pub fn current(&self) -> &UserSettings {
        &self.current
    }

    /// Normalize and persist `settings`, making them the current value.
    pub fn save(&mut self, settings: UserSettings) -> &UserSettings {
        let settings = settings.normalized();
        write_record(self.repo.as_ref(), RecordKey::Settings, &settings);
        tracing::debug!(
            speed = settings.speed,
            volume = settings.volume,
            "Settings saved"
        );
        self.current = settings;
        &self.current
    }

    /// Apply `change` to the current settings and persist the result.
    pub fn update(&mut self, change: impl FnOnce(UserSettings) -> UserSettings) -> &UserSettings {
        let next = change(self.current.clone());
        self.save(next)
    }

    /// Restore and persist the defaults.
    pub fn reset(&mut self) -> UserSettings {
        tracing::info!("Settings reset to defaults");
        self.save(UserSettings::default()).clone()
    }

    fn read(repo: &dyn RecordRepository) -> UserSettings {
        read_record::<UserSettings>(repo, RecordKey::Settings)
            .map(UserSettings::normalized)
            .unwrap_or_default()
    }
}

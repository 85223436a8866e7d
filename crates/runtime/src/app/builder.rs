use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::generation::{GenerationWorkflow, LevelGenerator, ProceduralGenerator, WorkflowSettings};
use crate::repository::{FileRecordRepository, RecordRepository};
use crate::session::GameSessionController;
use crate::stores::{HistoryStore, LevelStore, SettingsStore};

use super::App;

/// Builder for [`App`].
///
/// Every collaborator is optional: records default to JSON files under
/// [`RuntimeConfig::data_dir`], generation to [`ProceduralGenerator`], and
/// time to the system clock.
pub struct AppBuilder {
    config: RuntimeConfig,
    repository: Option<Arc<dyn RecordRepository>>,
    generator: Option<Arc<dyn LevelGenerator>>,
    clock: Option<Arc<dyn Clock>>,
}

impl AppBuilder {
    pub(super) fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
            generator: None,
            clock: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Store records somewhere other than the data directory
    pub fn repository(mut self, repository: Arc<dyn RecordRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replace the level generation service
    pub fn generator(mut self, generator: Arc<dyn LevelGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Load persisted records and assemble the controller.
    ///
    /// Fails only if the default file repository cannot create its directory.
    pub fn build(self) -> Result<App> {
        let config = self.config;

        let repository: Arc<dyn RecordRepository> = match self.repository {
            Some(repository) => repository,
            None => Arc::new(FileRecordRepository::new(&config.data_dir)?),
        };
        let generator = self
            .generator
            .unwrap_or_else(|| Arc::new(ProceduralGenerator::new(config.generation_latency)));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let settings = SettingsStore::new(Arc::clone(&repository));
        let levels = LevelStore::new(Arc::clone(&repository));
        let history = HistoryStore::new(Arc::clone(&repository), config.history_capacity);

        let (workflow, events) = GenerationWorkflow::new(
            generator,
            history,
            Arc::clone(&clock),
            WorkflowSettings {
                progress_interval: config.progress_interval,
                progress_capacity: config.progress_capacity,
            },
        );
        let sessions = GameSessionController::new(clock);

        tracing::info!(
            data_dir = %config.data_dir.display(),
            custom_levels = levels.levels().len(),
            "Application controller ready"
        );

        Ok(App::new(settings, levels, workflow, events, sessions))
    }
}

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use game_core::{GameObject, ObjectKind};
use runtime::{
    App, GeneratedLevel, GenerationError, GenerationEvent, GenerationOutcome,
    InMemoryRecordRepository, LevelGenerator, ManualClock, RecordRepository, RuntimeConfig,
};
use tokio::sync::{Notify, mpsc};

pub const START_MILLIS: i64 = 1_700_000_000_000;

/// Generator that answers with a fixed result once released.
pub struct ScriptedGenerator {
    gate: Arc<Notify>,
    result: Result<GeneratedLevel, GenerationError>,
}

impl ScriptedGenerator {
    pub fn new(result: Result<GeneratedLevel, GenerationError>) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let generator = Arc::new(Self {
            gate: Arc::clone(&gate),
            result,
        });
        (generator, gate)
    }
}

#[async_trait]
impl LevelGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedLevel, GenerationError> {
        self.gate.notified().await;
        self.result.clone()
    }
}

pub fn sample_generated() -> GeneratedLevel {
    GeneratedLevel {
        name: None,
        objects: vec![
            GameObject::new("g1", ObjectKind::Spike, 600.0, 360.0),
            GameObject::new("g2", ObjectKind::Block, 800.0, 360.0),
            GameObject::new("g3", ObjectKind::Coin, 800.0, 300.0),
        ],
    }
}

pub struct TestApp {
    pub app: App,
    pub events: mpsc::UnboundedReceiver<GenerationEvent>,
    pub repo: Arc<InMemoryRecordRepository>,
    pub clock: Arc<ManualClock>,
    pub gate: Arc<Notify>,
}

impl TestApp {
    pub fn new(result: Result<GeneratedLevel, GenerationError>) -> Self {
        Self::with_repo(result, Arc::new(InMemoryRecordRepository::new()))
    }

    pub fn with_repo(
        result: Result<GeneratedLevel, GenerationError>,
        repo: Arc<InMemoryRecordRepository>,
    ) -> Self {
        let (generator, gate) = ScriptedGenerator::new(result);
        let clock = Arc::new(ManualClock::new(START_MILLIS));

        let config = RuntimeConfig {
            progress_interval: Duration::from_millis(800),
            progress_capacity: 5,
            history_capacity: 20,
            ..RuntimeConfig::default()
        };

        let repository: Arc<dyn RecordRepository> = repo.clone();
        let mut app = App::builder()
            .config(config)
            .repository(repository)
            .generator(generator)
            .clock(clock.clone())
            .build()
            .expect("in-memory app builds");
        let events = app.take_generation_events().expect("receiver available");

        Self {
            app,
            events,
            repo,
            clock,
            gate,
        }
    }

    /// Feed events to the app until the in-flight request resolves.
    pub async fn resolve(&mut self) -> GenerationOutcome {
        loop {
            let event = self.events.recv().await.expect("generation channel open");
            if let Some(outcome) = self.app.handle_generation_event(event) {
                return outcome;
            }
        }
    }

    /// Apply every event already queued; returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.app.handle_generation_event(event);
            applied += 1;
        }
        applied
    }
}

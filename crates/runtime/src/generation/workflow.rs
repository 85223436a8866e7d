//! Prompt-to-level request lifecycle.
//!
//! ```text
//!            submit                 Completed(Ok)
//!   Idle ───────────▶ Requesting ───────────────▶ Success
//!    ▲                 │      │    Completed(Err)
//!    │      abort      │      └─────────────────▶ Error
//!    ├─────────────────┘                            │
//!    └──────────────── retry / dismiss ─────────────┘
//! ```
//!
//! At most one request is in flight: the ticket inside
//! [`GenerationPhase::Requesting`] is the only one whose events are applied.
//! Ticks and completions carrying any other ticket (an aborted request, a
//! feed that was already stopped) are dropped on arrival.

use std::sync::Arc;
use std::time::Duration;

use game_core::{AiHistoryEntry, Difficulty, LevelData, ai_level_id};
use tokio::sync::mpsc;

use super::error::GenerationError;
use super::generator::{GeneratedLevel, LevelGenerator};
use super::progress::{ProgressFeed, ProgressLog};
use crate::clock::Clock;
use crate::stores::{HistoryStore, LevelStore};

/// Identifies one accepted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub const fn first() -> Self {
        Self(1)
    }

    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Where the workflow is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Ready for a new prompt.
    Idle,
    /// One request is in flight.
    Requesting { ticket: RequestTicket },
    /// The last request produced (and stored) this level.
    Success { level_id: String },
    /// The last request failed; `message` is what the user sees.
    Error { message: String },
}

/// Messages delivered to the controller's event loop.
#[derive(Debug)]
pub enum GenerationEvent {
    /// One progress-feed interval elapsed.
    Tick { ticket: RequestTicket },
    /// The generator answered.
    Completed {
        ticket: RequestTicket,
        prompt: String,
        result: Result<GeneratedLevel, GenerationError>,
    },
}

/// Terminal result of a request, reported once per accepted request.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationOutcome {
    Generated(LevelData),
    Failed { message: String },
}

/// Tunables for the workflow.
#[derive(Clone, Copy, Debug)]
pub struct WorkflowSettings {
    pub progress_interval: Duration,
    pub progress_capacity: usize,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            progress_interval: super::DEFAULT_PROGRESS_INTERVAL,
            progress_capacity: super::DEFAULT_PROGRESS_CAPACITY,
        }
    }
}

/// Orchestrates requests to the level generator.
pub struct GenerationWorkflow {
    generator: Arc<dyn LevelGenerator>,
    history: HistoryStore,
    clock: Arc<dyn Clock>,
    events: mpsc::UnboundedSender<GenerationEvent>,
    settings: WorkflowSettings,

    phase: GenerationPhase,
    prompt: String,
    progress: ProgressLog,
    feed: Option<ProgressFeed>,
    next_ticket: RequestTicket,
}

impl GenerationWorkflow {
    /// Create an idle workflow and the receiver its events arrive on.
    pub fn new(
        generator: Arc<dyn LevelGenerator>,
        history: HistoryStore,
        clock: Arc<dyn Clock>,
        settings: WorkflowSettings,
    ) -> (Self, mpsc::UnboundedReceiver<GenerationEvent>) {
        let (events, rx) = mpsc::unbounded_channel();

        let workflow = Self {
            generator,
            history,
            clock,
            events,
            settings,
            phase: GenerationPhase::Idle,
            prompt: String::new(),
            progress: ProgressLog::new(settings.progress_capacity),
            feed: None,
            next_ticket: RequestTicket::first(),
        };

        (workflow, rx)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn phase(&self) -> &GenerationPhase {
        &self.phase
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn progress(&self) -> &ProgressLog {
        &self.progress
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.phase, GenerationPhase::Requesting { .. })
    }

    /// Returns true while the progress timer task is alive.
    pub fn is_feed_running(&self) -> bool {
        self.feed.as_ref().is_some_and(ProgressFeed::is_running)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            GenerationPhase::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Returns true if [`submit`](Self::submit) would accept the current prompt.
    pub fn can_submit(&self) -> bool {
        !self.is_requesting() && !self.prompt.trim().is_empty()
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Replace the prompt text. Ignored while a request is in flight.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> bool {
        if self.is_requesting() {
            return false;
        }
        self.prompt = prompt.into();
        true
    }

    /// Send the current prompt to the generator.
    ///
    /// No-op (returns `None`) when the prompt is blank or a request is
    /// already in flight. Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> Option<RequestTicket> {
        if self.is_requesting() {
            tracing::debug!("Generation already in flight; submit ignored");
            return None;
        }
        if self.prompt.trim().is_empty() {
            tracing::debug!("Empty prompt; submit ignored");
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();
        self.phase = GenerationPhase::Requesting { ticket };

        self.progress.clear();
        self.stop_feed();
        self.feed = Some(ProgressFeed::start(
            ticket,
            self.settings.progress_interval,
            self.events.clone(),
        ));

        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        let prompt = self.prompt.clone();

        tracing::info!(?ticket, prompt = %prompt, "Generation requested");

        tokio::spawn(async move {
            let result = generator
                .generate(&prompt)
                .await
                .and_then(GeneratedLevel::validated);

            if events
                .send(GenerationEvent::Completed {
                    ticket,
                    prompt,
                    result,
                })
                .is_err()
            {
                tracing::debug!(?ticket, "Workflow gone before generation completed");
            }
        });

        Some(ticket)
    }

    /// Apply an event from the channel returned by [`new`](Self::new).
    ///
    /// Returns the outcome when the in-flight request resolves. Successful
    /// results are appended to the history and upserted into `levels`.
    pub fn handle_event(
        &mut self,
        event: GenerationEvent,
        levels: &mut LevelStore,
    ) -> Option<GenerationOutcome> {
        match event {
            GenerationEvent::Tick { ticket } => {
                if self.is_current(ticket) {
                    let message = self.progress.advance();
                    tracing::trace!(?ticket, message, "Progress tick");
                } else {
                    tracing::trace!(?ticket, "Dropping stale progress tick");
                }
                None
            }
            GenerationEvent::Completed {
                ticket,
                prompt,
                result,
            } => {
                if !self.is_current(ticket) {
                    tracing::info!(?ticket, "Discarding result of abandoned request");
                    return None;
                }

                self.stop_feed();

                let outcome = match result {
                    Ok(generated) => self.complete(&prompt, generated, levels),
                    Err(error) => {
                        let message = error.user_message();
                        tracing::warn!(?ticket, "Generation failed: {}", message);
                        self.phase = GenerationPhase::Error {
                            message: message.clone(),
                        };
                        GenerationOutcome::Failed { message }
                    }
                };

                Some(outcome)
            }
        }
    }

    /// From `Error`, clear the error and prompt and return to `Idle`.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.phase, GenerationPhase::Error { .. }) {
            return false;
        }
        self.phase = GenerationPhase::Idle;
        self.prompt.clear();
        true
    }

    /// From `Requesting`, stop the feed and forget the request.
    ///
    /// The generator call itself keeps running; its result is discarded when
    /// it arrives.
    pub fn abort(&mut self) -> bool {
        let GenerationPhase::Requesting { ticket } = self.phase else {
            return false;
        };

        self.stop_feed();
        self.phase = GenerationPhase::Idle;
        tracing::info!(?ticket, "Generation abandoned");
        true
    }

    /// From `Success` or `Error`, return to `Idle` keeping the prompt.
    pub fn dismiss(&mut self) -> bool {
        match self.phase {
            GenerationPhase::Success { .. } | GenerationPhase::Error { .. } => {
                self.phase = GenerationPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Return to a fresh `Idle` with no prompt, unless a request is in flight.
    pub fn reset(&mut self) -> bool {
        if self.is_requesting() {
            return false;
        }
        self.phase = GenerationPhase::Idle;
        self.prompt.clear();
        true
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn is_current(&self, ticket: RequestTicket) -> bool {
        self.phase == GenerationPhase::Requesting { ticket }
    }

    fn stop_feed(&mut self) {
        if let Some(mut feed) = self.feed.take() {
            feed.stop();
        }
    }

    fn complete(
        &mut self,
        prompt: &str,
        generated: GeneratedLevel,
        levels: &mut LevelStore,
    ) -> GenerationOutcome {
        let timestamp = self.clock.now_millis();
        let name = generated.name_or_default(prompt);
        let level = LevelData::new(
            ai_level_id(timestamp),
            name,
            Difficulty::Medium,
            generated.objects,
        );

        self.history.append(AiHistoryEntry {
            id: level.id.clone(),
            name: level.name.clone(),
            prompt: prompt.to_string(),
            objects: level.objects.clone(),
            timestamp,
        });
        levels.upsert(level.clone());

        tracing::info!(
            level_id = %level.id,
            objects = level.objects.len(),
            "Generated level stored"
        );

        self.phase = GenerationPhase::Success {
            level_id: level.id.clone(),
        };
        self.prompt.clear();

        GenerationOutcome::Generated(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::repository::{InMemoryRecordRepository, RecordRepository};
    use async_trait::async_trait;
    use game_core::{GameObject, ObjectKind};
    use tokio::sync::Notify;

    /// Generator that answers once `gate` is notified.
    struct GatedGenerator {
        gate: Arc<Notify>,
        result: Result<GeneratedLevel, GenerationError>,
    }

    #[async_trait]
    impl LevelGenerator for GatedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedLevel, GenerationError> {
            self.gate.notified().await;
            self.result.clone()
        }
    }

    struct Harness {
        workflow: GenerationWorkflow,
        events: mpsc::UnboundedReceiver<GenerationEvent>,
        levels: LevelStore,
        gate: Arc<Notify>,
    }

    impl Harness {
        fn new(result: Result<GeneratedLevel, GenerationError>) -> Self {
            let repo: Arc<dyn RecordRepository> = Arc::new(InMemoryRecordRepository::new());
            let gate = Arc::new(Notify::new());
            let generator = Arc::new(GatedGenerator {
                gate: Arc::clone(&gate),
                result,
            });
            let (workflow, events) = GenerationWorkflow::new(
                generator,
                HistoryStore::new(Arc::clone(&repo), 20),
                Arc::new(ManualClock::new(1_700_000_000_000)),
                WorkflowSettings::default(),
            );

            Self {
                workflow,
                events,
                levels: LevelStore::new(repo),
                gate,
            }
        }

        /// Apply queued events until the in-flight request resolves.
        async fn resolve(&mut self) -> GenerationOutcome {
            loop {
                let event = self.events.recv().await.expect("channel open");
                if let Some(outcome) = self.workflow.handle_event(event, &mut self.levels) {
                    return outcome;
                }
            }
        }

        /// Apply everything currently queued.
        fn drain(&mut self) -> usize {
            let mut applied = 0;
            while let Ok(event) = self.events.try_recv() {
                self.workflow.handle_event(event, &mut self.levels);
                applied += 1;
            }
            applied
        }
    }

    fn generated(name: Option<&str>) -> GeneratedLevel {
        GeneratedLevel {
            name: name.map(str::to_string),
            objects: vec![
                GameObject::new("g1", ObjectKind::Spike, 600.0, 360.0),
                GameObject::new("g2", ObjectKind::Coin, 700.0, 300.0),
            ],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn success_stores_level_and_history() {
        let mut h = Harness::new(Ok(generated(None)));
        h.workflow.set_prompt("neon storms");

        let ticket = h.workflow.submit().expect("accepted");
        assert_eq!(h.workflow.phase(), &GenerationPhase::Requesting { ticket });
        assert!(h.workflow.is_feed_running());

        h.gate.notify_one();
        let GenerationOutcome::Generated(level) = h.resolve().await else {
            panic!("expected success");
        };

        assert!(level.id.starts_with("custom-ai-"));
        assert_eq!(level.name, "Puppet: neon storms");
        assert_eq!(level.difficulty, Difficulty::Medium);
        assert_eq!(level.objects.len(), 2);

        assert_eq!(
            h.workflow.phase(),
            &GenerationPhase::Success {
                level_id: level.id.clone()
            }
        );
        assert_eq!(h.workflow.prompt(), "");
        assert!(!h.workflow.is_feed_running());
        assert_eq!(h.levels.levels(), [level.clone()]);

        let history = h.workflow.history().load_all();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].prompt, "neon storms");
        assert_eq!(history[0].id, level.id);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_surfaces_message_and_retry_clears() {
        let mut h = Harness::new(Err(GenerationError::with_message("rate limited")));
        h.workflow.set_prompt("neon storms");
        h.workflow.submit().expect("accepted");

        h.gate.notify_one();
        let outcome = h.resolve().await;

        assert_eq!(
            outcome,
            GenerationOutcome::Failed {
                message: "rate limited".into()
            }
        );
        assert_eq!(h.workflow.error_message(), Some("rate limited"));
        assert!(!h.workflow.is_feed_running());
        assert!(h.levels.levels().is_empty());

        assert!(h.workflow.retry());
        assert_eq!(h.workflow.phase(), &GenerationPhase::Idle);
        assert_eq!(h.workflow.prompt(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn unexplained_failure_uses_fallback() {
        let mut h = Harness::new(Ok(GeneratedLevel::default()));
        h.workflow.set_prompt("void");
        h.workflow.submit();
        h.gate.notify_one();

        let outcome = h.resolve().await;
        assert_eq!(
            outcome,
            GenerationOutcome::Failed {
                message: crate::generation::FALLBACK_MESSAGE.into()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn submit_is_guarded() {
        let mut h = Harness::new(Ok(generated(Some("Named"))));

        assert_eq!(h.workflow.submit(), None);
        h.workflow.set_prompt("   ");
        assert_eq!(h.workflow.submit(), None);

        h.workflow.set_prompt("first");
        assert!(h.workflow.submit().is_some());
        assert_eq!(h.workflow.submit(), None);
        assert!(!h.workflow.set_prompt("changed mid-flight"));
        assert_eq!(h.workflow.prompt(), "first");
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_request_result_is_discarded() {
        let mut h = Harness::new(Ok(generated(Some("Late"))));
        h.workflow.set_prompt("late bloomer");
        h.workflow.submit();

        assert!(h.workflow.abort());
        assert!(!h.workflow.abort());
        assert_eq!(h.workflow.phase(), &GenerationPhase::Idle);
        assert!(!h.workflow.is_feed_running());

        h.gate.notify_one();
        let event = h.events.recv().await.expect("late completion");
        assert!(matches!(event, GenerationEvent::Completed { .. }));
        assert_eq!(h.workflow.handle_event(event, &mut h.levels), None);

        assert_eq!(h.workflow.phase(), &GenerationPhase::Idle);
        assert!(h.levels.levels().is_empty());
        assert!(h.workflow.history().load_all().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn progress_stops_at_resolution() {
        let mut h = Harness::new(Ok(generated(Some("Ticker"))));
        h.workflow.set_prompt("ticks");
        h.workflow.submit();

        tokio::time::sleep(Duration::from_millis(2500)).await;
        h.drain();
        assert_eq!(h.workflow.progress().len(), 3);

        h.gate.notify_one();
        h.resolve().await;
        let frozen: Vec<_> = h.workflow.progress().entries().collect();

        tokio::time::sleep(Duration::from_secs(10)).await;
        h.drain();
        let after: Vec<_> = h.workflow.progress().entries().collect();
        assert_eq!(frozen, after);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticks_after_abort_are_ignored() {
        let mut h = Harness::new(Ok(generated(None)));
        h.workflow.set_prompt("abort me");
        let ticket = h.workflow.submit().expect("accepted");
        h.workflow.abort();

        let before = h.workflow.progress().len();
        h.workflow
            .handle_event(GenerationEvent::Tick { ticket }, &mut h.levels);
        assert_eq!(h.workflow.progress().len(), before);
    }
}

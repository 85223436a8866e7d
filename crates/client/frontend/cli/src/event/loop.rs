//! Event loop orchestrating generation events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Generation event delivery into the controller
//! - Keyboard input processing and per-frame runner steps
//! - Rendering the controller and terminal-local state

use std::sync::Arc;

use anyhow::Result;
use runtime::{App, AppAction, Clock};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::UiState,
};
use client_frontend_core::{FrontendConfig, MessageEntry, MessageLog};

/// Event loop owning the controller for the lifetime of the terminal session.
pub struct EventLoop {
    pub(crate) app: App,
    pub(crate) ui: UiState,
    pub(crate) input: InputHandler,
    pub(crate) messages: MessageLog,
    pub(crate) frame_interval: Duration,
    pub(crate) cli_config: CliConfig,
    pub(crate) clock: Arc<dyn Clock>,
}

impl EventLoop {
    pub fn new(
        app: App,
        frontend_config: &FrontendConfig,
        cli_config: CliConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut event_loop = Self {
            app,
            ui: UiState::new(),
            input: InputHandler::new(),
            messages: MessageLog::new(frontend_config.messages.capacity),
            frame_interval: frontend_config.frames.interval,
            cli_config,
            clock,
        };
        event_loop.sync();
        event_loop
    }

    /// Run until the user quits, then hand the controller back.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<App> {
        self.render(terminal)?;

        let mut generation_rx = self.app.take_generation_events();
        if generation_rx.is_none() {
            tracing::warn!("Generation events already taken; synthesis results will not arrive");
        }

        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                event = async { generation_rx.as_mut()?.recv().await }, if generation_rx.is_some() => {
                    match event {
                        Some(event) => self.handle_generation_event(event),
                        None => {
                            tracing::warn!("Generation event stream closed");
                            generation_rx = None;
                        }
                    }
                }
                _ = frames.tick() => {
                    if self.handle_input_tick()? {
                        break;
                    }
                    self.advance_frame();
                }
            }

            self.render(terminal)?;
        }

        tracing::info!(view = %self.app.view(), "Event loop finished");
        Ok(self.app)
    }

    /// Dispatch an action, logging rejections to the status panel.
    pub(crate) fn dispatch(&mut self, action: AppAction) {
        let kind = action.kind();
        match self.app.dispatch(action) {
            Ok(()) => {
                tracing::debug!(%kind, view = %self.app.view(), "Dispatched action");
                if let Some(notice) = notice_for(kind) {
                    self.messages.push_text(notice);
                }
            }
            Err(err) => self.messages.push(MessageEntry::from_rejection(&err)),
        }
        self.sync();
    }

    pub(crate) fn sync(&mut self) {
        let now = self.clock.now_millis();
        self.ui.sync(&self.app, now);
    }
}

/// Status line confirming actions whose effect is not otherwise visible.
fn notice_for(kind: runtime::ActionKind) -> Option<&'static str> {
    use runtime::ActionKind::*;
    match kind {
        FactoryReset => Some("Settings restored to factory defaults"),
        SaveSettings => Some("Settings saved"),
        SaveLevel => Some("Level saved to workshop"),
        AbortGeneration => Some("Synthesis aborted"),
        RetryGeneration => Some("Retrying synthesis"),
        SubmitPrompt => Some("Synthesis requested"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use runtime::{InMemoryRecordRepository, ManualClock, RuntimeConfig, View};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn event_loop() -> EventLoop {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(10_000));
        let config = RuntimeConfig {
            generation_latency: Duration::from_millis(1_500),
            ..RuntimeConfig::default()
        };
        let app = App::builder()
            .config(config)
            .repository(Arc::new(InMemoryRecordRepository::new()))
            .clock(Arc::clone(&clock))
            .build()
            .expect("in-memory app");
        EventLoop::new(app, &FrontendConfig::default(), CliConfig::default(), clock)
    }

    #[tokio::test]
    async fn rejected_actions_reach_status_log() {
        let mut event_loop = event_loop();
        event_loop.dispatch(AppAction::Restart);

        let latest = event_loop.messages.recent(1).next().map(|m| m.text.clone());
        assert_eq!(latest.as_deref(), Some("Restart is not available in MENU"));
        assert_eq!(event_loop.app.view(), View::Menu);
    }

    #[tokio::test]
    async fn runner_signal_pauses_session() {
        let mut event_loop = event_loop();
        event_loop.dispatch(AppAction::OpenLevelSelect);
        assert!(!event_loop.apply_key(key(KeyCode::Enter)));
        assert_eq!(event_loop.app.view(), View::Play);

        for _ in 0..5_000 {
            event_loop.advance_frame();
            if event_loop.app.play().is_some_and(|s| s.is_paused()) {
                break;
            }
        }

        let session = event_loop.app.play().expect("still in play");
        assert!(session.is_paused());
        assert!(event_loop.ui.runner.as_ref().is_some_and(|r| r.is_finished()));
        assert!(!event_loop.messages.is_empty());

        // Retry from the overlay starts a fresh runner
        event_loop.apply_key(key(KeyCode::Enter));
        assert!(!event_loop.app.play().expect("restarted").is_paused());
        assert!(event_loop.ui.runner.as_ref().is_some_and(|r| !r.is_finished()));
    }

    #[tokio::test(start_paused = true)]
    async fn typed_prompt_generates_level() {
        let mut event_loop = event_loop();
        let mut events = event_loop
            .app
            .take_generation_events()
            .expect("fresh controller");

        event_loop.dispatch(AppAction::OpenLevelSelect);
        event_loop.apply_key(key(KeyCode::Char('g')));
        for ch in "crystal caverns".chars() {
            event_loop.apply_key(key(KeyCode::Char(ch)));
        }
        event_loop.apply_key(key(KeyCode::Enter));
        assert!(event_loop.app.generation().is_requesting());

        while event_loop.app.generation().is_requesting() {
            let event = events.recv().await.expect("workflow keeps its sender");
            event_loop.handle_generation_event(event);
        }

        let level = event_loop
            .app
            .custom_levels()
            .iter()
            .find(|level| level.is_ai_generated())
            .expect("generated level stored");
        assert_eq!(level.name, "Crystal Caverns");
        assert_eq!(event_loop.app.view(), View::LevelSelect);
        assert!(!event_loop.app.is_ai_modal_open());
        assert!(
            event_loop
                .messages
                .iter()
                .any(|m| m.text.contains("Crystal Caverns"))
        );
    }

    #[test]
    fn quit_key_ends_loop() {
        let mut event_loop = event_loop();
        assert!(event_loop.apply_key(key(KeyCode::Char('q'))));
    }
}

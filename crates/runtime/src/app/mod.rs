//! The view state machine.
//!
//! [`App`] owns the current [`View`] and the transient UI state around it
//! (generation modal, level handed to the editor, last coin count) and routes
//! every [`AppAction`] to the store or controller responsible for it.
//!
//! Invariants:
//! - `View::Play` is entered only through [`GameSessionController::start`],
//!   so a play view always has an active session and level.
//! - The editor only ever receives a custom level.
//! - While a generation request is in flight the modal stays open and only
//!   [`AppAction::AbortGeneration`] is offered.

mod action;
mod builder;
mod error;

pub use action::{ActionKind, AppAction, View};
pub use builder::AppBuilder;
pub use error::TransitionError;

use game_core::{AiHistoryEntry, LevelData, UserSettings, builtin_levels};
use tokio::sync::mpsc;

use crate::generation::{GenerationEvent, GenerationOutcome, GenerationPhase, GenerationWorkflow};
use crate::session::{ActiveSession, GameSessionController};
use crate::stores::{LevelStore, SettingsStore};

/// Application controller.
pub struct App {
    view: View,
    ai_modal_open: bool,
    editor_level: Option<LevelData>,
    last_coins: u32,

    builtin: Vec<LevelData>,
    settings: SettingsStore,
    levels: LevelStore,
    workflow: GenerationWorkflow,
    generation_events: Option<mpsc::UnboundedReceiver<GenerationEvent>>,
    sessions: GameSessionController,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    fn new(
        settings: SettingsStore,
        levels: LevelStore,
        workflow: GenerationWorkflow,
        generation_events: mpsc::UnboundedReceiver<GenerationEvent>,
        sessions: GameSessionController,
    ) -> Self {
        Self {
            view: View::Menu,
            ai_modal_open: false,
            editor_level: None,
            last_coins: 0,
            builtin: builtin_levels(),
            settings,
            levels,
            workflow,
            generation_events: Some(generation_events),
            sessions,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn settings(&self) -> &UserSettings {
        self.settings.current()
    }

    /// Built-in levels followed by custom levels.
    pub fn levels(&self) -> Vec<LevelData> {
        self.builtin
            .iter()
            .chain(self.levels.levels())
            .cloned()
            .collect()
    }

    pub fn custom_levels(&self) -> &[LevelData] {
        self.levels.levels()
    }

    /// Generation history, most recent first.
    pub fn ai_history(&self) -> Vec<AiHistoryEntry> {
        self.workflow.history().load_all()
    }

    pub fn generation(&self) -> &GenerationWorkflow {
        &self.workflow
    }

    pub fn is_ai_modal_open(&self) -> bool {
        self.ai_modal_open
    }

    /// The running attempt; only present in [`View::Play`].
    pub fn play(&self) -> Option<&ActiveSession> {
        match self.view {
            View::Play => self.sessions.active(),
            _ => None,
        }
    }

    /// Level handed to the editor; `None` means a blank level.
    pub fn editor_level(&self) -> Option<&LevelData> {
        self.editor_level.as_ref()
    }

    pub fn last_coins(&self) -> u32 {
        self.last_coins
    }

    /// Actions the current state exposes, in display order.
    pub fn available_actions(&self) -> Vec<ActionKind> {
        use ActionKind::*;

        match self.view {
            View::Menu => vec![OpenLevelSelect, OpenWorkshop, OpenSettings],
            View::Settings => vec![
                SetSpeed,
                NudgeSpeed,
                SetVolume,
                NudgeVolume,
                SetPrimaryColor,
                SetSecondaryColor,
                FactoryReset,
                SaveSettings,
                BackToMenu,
            ],
            View::LevelSelect if !self.ai_modal_open => {
                let mut actions = vec![Deploy];
                if !self.levels.levels().is_empty() {
                    actions.push(EditLevel);
                }
                actions.extend([NewLevel, OpenAiModal, BackToMenu]);
                actions
            }
            View::LevelSelect => match self.workflow.phase() {
                GenerationPhase::Requesting { .. } => vec![AbortGeneration],
                GenerationPhase::Error { .. } => vec![RetryGeneration, ReturnToBase],
                GenerationPhase::Idle | GenerationPhase::Success { .. } => {
                    let mut actions = vec![SetPrompt];
                    if self.workflow.can_submit() {
                        actions.push(SubmitPrompt);
                    }
                    actions.extend([CloseAiModal, ExitAiToMenu]);
                    actions
                }
            },
            View::Play => {
                let mut actions = Vec::with_capacity(4);
                if !self.sessions.is_paused() {
                    actions.extend([GameOver, Win]);
                }
                actions.extend([Restart, QuitPlay]);
                actions
            }
            View::Editor => vec![SaveLevel, ExitEditor],
        }
    }

    pub fn is_available(&self, kind: ActionKind) -> bool {
        self.available_actions().contains(&kind)
    }

    /// Whether [`AppAction::EditLevel`] would accept `level_id` right now.
    ///
    /// Only stored custom levels can be edited.
    pub fn can_edit(&self, level_id: &str) -> bool {
        self.is_available(ActionKind::EditLevel) && self.levels.get(level_id).is_some()
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Apply a user or collaborator action.
    pub fn dispatch(&mut self, action: AppAction) -> Result<(), TransitionError> {
        let kind = action.kind();
        if !self.is_available(kind) {
            tracing::warn!("Rejected {} in {}", kind, self.view);
            return Err(TransitionError::NotAvailable {
                action: kind,
                view: self.view,
            });
        }

        match action {
            AppAction::OpenLevelSelect => {
                self.ai_modal_open = false;
                self.navigate(View::LevelSelect);
            }
            AppAction::OpenWorkshop | AppAction::NewLevel => {
                self.editor_level = None;
                self.navigate(View::Editor);
            }
            AppAction::OpenSettings => self.navigate(View::Settings),
            AppAction::BackToMenu | AppAction::SaveSettings => self.navigate(View::Menu),

            AppAction::SetSpeed(speed) => {
                self.settings.update(|s| UserSettings { speed, ..s });
            }
            AppAction::NudgeSpeed(steps) => {
                self.settings.update(|s| s.nudge_speed(steps));
            }
            AppAction::SetVolume(volume) => {
                self.settings.update(|s| UserSettings { volume, ..s });
            }
            AppAction::NudgeVolume(steps) => {
                self.settings.update(|s| s.nudge_volume(steps));
            }
            AppAction::SetPrimaryColor(primary_color) => {
                self.settings.update(|s| UserSettings { primary_color, ..s });
            }
            AppAction::SetSecondaryColor(secondary_color) => {
                self.settings.update(|s| UserSettings {
                    secondary_color,
                    ..s
                });
            }
            AppAction::FactoryReset => {
                self.settings.reset();
            }

            AppAction::Deploy { level_id } => {
                let level = self
                    .find_level(&level_id)
                    .cloned()
                    .ok_or(TransitionError::UnknownLevel(level_id))?;
                self.start_session(level);
            }
            AppAction::EditLevel { level_id } => {
                let level = match self.levels.get(&level_id) {
                    Some(level) => level.clone(),
                    None if self.builtin.iter().any(|l| l.id == level_id) => {
                        return Err(TransitionError::NotEditable(level_id));
                    }
                    None => return Err(TransitionError::UnknownLevel(level_id)),
                };
                self.editor_level = Some(level);
                self.navigate(View::Editor);
            }

            AppAction::OpenAiModal => {
                self.workflow.dismiss();
                self.ai_modal_open = true;
            }
            AppAction::CloseAiModal => self.ai_modal_open = false,
            AppAction::SetPrompt(prompt) => {
                self.workflow.set_prompt(prompt);
            }
            AppAction::SubmitPrompt => {
                self.workflow.submit();
            }
            AppAction::AbortGeneration => {
                self.workflow.abort();
                self.ai_modal_open = false;
                self.navigate(View::Menu);
            }
            AppAction::RetryGeneration => {
                self.workflow.retry();
            }
            AppAction::ReturnToBase => {
                self.workflow.reset();
                self.ai_modal_open = false;
                self.navigate(View::Menu);
            }
            AppAction::ExitAiToMenu => {
                self.ai_modal_open = false;
                self.navigate(View::Menu);
            }

            AppAction::GameOver { session, coins } | AppAction::Win { session, coins } => {
                if self.sessions.active().map(ActiveSession::id) != Some(session) {
                    tracing::debug!(%session, "Ignoring signal from a previous session");
                    return Ok(());
                }
                let recorded = match kind {
                    ActionKind::Win => self.sessions.on_win(coins),
                    _ => self.sessions.on_game_over(coins),
                };
                if recorded {
                    self.last_coins = coins;
                }
            }
            AppAction::Restart => {
                if self.sessions.restart().is_some() {
                    self.last_coins = 0;
                }
            }
            AppAction::QuitPlay => {
                self.sessions.end();
                self.navigate(View::LevelSelect);
            }

            AppAction::SaveLevel(level) => {
                if !level.is_custom() {
                    return Err(TransitionError::NotEditable(level.id));
                }
                tracing::info!(level = %level.id, "Saving level from editor");
                self.levels.upsert(level);
                self.editor_level = None;
                self.navigate(View::LevelSelect);
            }
            AppAction::ExitEditor => {
                self.editor_level = None;
                self.navigate(View::Menu);
            }
        }

        Ok(())
    }

    /// Hand the generation event receiver to the event loop.
    ///
    /// Returns `None` after the first call.
    pub fn take_generation_events(&mut self) -> Option<mpsc::UnboundedReceiver<GenerationEvent>> {
        self.generation_events.take()
    }

    /// Apply a generation event and navigate on success.
    pub fn handle_generation_event(&mut self, event: GenerationEvent) -> Option<GenerationOutcome> {
        let outcome = self.workflow.handle_event(event, &mut self.levels)?;

        if let GenerationOutcome::Generated(level) = &outcome {
            tracing::info!(level = %level.id, "Generated level ready");
            self.ai_modal_open = false;
            self.navigate(View::LevelSelect);
        }

        Some(outcome)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn find_level(&self, id: &str) -> Option<&LevelData> {
        self.builtin
            .iter()
            .chain(self.levels.levels())
            .find(|level| level.id == id)
    }

    fn start_session(&mut self, level: LevelData) {
        self.sessions.start(level);
        self.last_coins = 0;
        self.ai_modal_open = false;
        self.navigate(View::Play);
    }

    fn navigate(&mut self, to: View) {
        if self.view != to {
            tracing::info!("View {} -> {}", self.view, to);
        }
        self.view = to;
    }
}

//! Terminal-local UI state layered over the application controller.
//!
//! The controller owns navigation and records; this holds the selection
//! cursors, edit buffers, and the gameplay/editor collaborators whose
//! lifetime follows the controller's view.

use game_core::LevelData;
use runtime::{App, AppAction, View};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::collaborators::{TrackRunner, Workshop};

/// Entries on the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum MenuEntry {
    Play,
    Workshop,
    Settings,
}

impl MenuEntry {
    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "INITIATE SEQUENCE",
            Self::Workshop => "PUPPET WORKSHOP",
            Self::Settings => "SYSTEM CONFIG",
        }
    }

    pub fn action(self) -> AppAction {
        match self {
            Self::Play => AppAction::OpenLevelSelect,
            Self::Workshop => AppAction::OpenWorkshop,
            Self::Settings => AppAction::OpenSettings,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or(Self::Play)
    }
}

/// Rows on the settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum SettingsField {
    Speed,
    Volume,
    PrimaryColor,
    SecondaryColor,
    FactoryReset,
    Save,
}

impl SettingsField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Speed => "Puppet Speed",
            Self::Volume => "Master Volume",
            Self::PrimaryColor => "Primary Neon",
            Self::SecondaryColor => "Secondary Neon",
            Self::FactoryReset => "Factory Reset",
            Self::Save => "Save & Exit",
        }
    }

    pub fn is_color(self) -> bool {
        matches!(self, Self::PrimaryColor | Self::SecondaryColor)
    }

    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or(Self::Speed)
    }
}

/// Mutable terminal state tracking selections and collaborators.
#[derive(Debug, Default)]
pub struct UiState {
    pub menu_index: usize,
    pub settings_index: usize,
    /// Hex text being typed for the selected color field.
    pub color_edit: Option<String>,
    pub level_index: usize,
    pub runner: Option<TrackRunner>,
    pub workshop: Option<Workshop>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_entry(&self) -> MenuEntry {
        MenuEntry::from_index(self.menu_index)
    }

    pub fn settings_field(&self) -> SettingsField {
        SettingsField::from_index(self.settings_index)
    }

    pub fn move_menu(&mut self, delta: i32) {
        self.menu_index = step_index(self.menu_index, delta, MenuEntry::COUNT);
    }

    pub fn move_settings(&mut self, delta: i32) {
        self.settings_index = step_index(self.settings_index, delta, SettingsField::COUNT);
        self.color_edit = None;
    }

    pub fn move_level(&mut self, delta: i32, count: usize) {
        self.level_index = step_index(self.level_index, delta, count);
    }

    /// Level under the level-select cursor.
    pub fn selected_level(&self, app: &App) -> Option<LevelData> {
        app.levels().into_iter().nth(self.level_index)
    }

    /// Reconcile collaborators and cursors with the controller after a change.
    ///
    /// A new session id (deploy or restart) rebuilds the runner. Entering the
    /// editor builds a workshop from the editor level and generation history.
    pub fn sync(&mut self, app: &App, now_millis: i64) {
        match app.play() {
            Some(session) => {
                if self.runner.as_ref().map(TrackRunner::session) != Some(session.id()) {
                    self.runner = Some(TrackRunner::new(
                        session.id(),
                        session.level(),
                        app.settings(),
                    ));
                }
            }
            None => self.runner = None,
        }

        if app.view() == View::Editor {
            if self.workshop.is_none() {
                self.workshop = Some(Workshop::new(
                    app.editor_level(),
                    app.ai_history(),
                    now_millis,
                ));
            }
        } else {
            self.workshop = None;
        }

        if app.view() != View::Settings {
            self.color_edit = None;
        }

        let count = app.levels().len();
        self.level_index = self.level_index.min(count.saturating_sub(1));
    }
}

fn step_index(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = (len - 1) as i64;
    (current as i64 + i64::from(delta)).clamp(0, last) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::{InMemoryRecordRepository, ManualClock};
    use std::sync::Arc;

    fn app() -> App {
        App::builder()
            .repository(Arc::new(InMemoryRecordRepository::new()))
            .clock(Arc::new(ManualClock::new(1_000)))
            .build()
            .expect("in-memory app")
    }

    #[tokio::test]
    async fn runner_follows_session_id() {
        let mut app = app();
        let mut ui = UiState::new();

        app.dispatch(AppAction::OpenLevelSelect).unwrap();
        app.dispatch(AppAction::Deploy {
            level_id: "1".into(),
        })
        .unwrap();
        ui.sync(&app, 0);
        let first = ui.runner.as_ref().map(TrackRunner::session);
        assert!(first.is_some());

        app.dispatch(AppAction::Restart).unwrap();
        ui.sync(&app, 0);
        let second = ui.runner.as_ref().map(TrackRunner::session);
        assert_ne!(first, second);

        app.dispatch(AppAction::QuitPlay).unwrap();
        ui.sync(&app, 0);
        assert!(ui.runner.is_none());
    }

    #[tokio::test]
    async fn workshop_lives_with_editor_view() {
        let mut app = app();
        let mut ui = UiState::new();

        app.dispatch(AppAction::OpenWorkshop).unwrap();
        ui.sync(&app, 42);
        assert_eq!(ui.workshop.as_ref().map(Workshop::id), Some("custom-42"));

        app.dispatch(AppAction::ExitEditor).unwrap();
        ui.sync(&app, 43);
        assert!(ui.workshop.is_none());
    }

    #[test]
    fn selection_indices_clamp() {
        let mut ui = UiState::new();
        ui.move_menu(-1);
        assert_eq!(ui.menu_entry(), MenuEntry::Play);
        ui.move_menu(10);
        assert_eq!(ui.menu_entry(), MenuEntry::Settings);

        ui.settings_index = 2;
        ui.color_edit = Some("#12".into());
        ui.move_settings(1);
        assert_eq!(ui.settings_field(), SettingsField::SecondaryColor);
        assert!(ui.color_edit.is_none());

        ui.move_level(3, 0);
        assert_eq!(ui.level_index, 0);
    }
}

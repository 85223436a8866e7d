//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events. Keys either mutate terminal-local state
//! (cursors, edit buffers, the runner's jump) or decode into an
//! [`AppAction`] for the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use runtime::{App, AppAction, GenerationPhase, View};

use crate::state::{SettingsField, UiState};

/// Longest accepted `#rrggbb` buffer.
const COLOR_BUFFER_LEN: usize = 7;
/// Volume steps applied per key press.
const VOLUME_KEY_STEPS: i32 = 5;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the decoded action to the controller.
    Dispatch(AppAction),
    /// Handled locally, or no meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into controller actions based on the current view.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, app: &App, ui: &mut UiState) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match app.view() {
            View::Menu => self.menu(key, ui),
            View::Settings => self.settings(key, app, ui),
            View::LevelSelect if app.is_ai_modal_open() => self.ai_modal(key, app),
            View::LevelSelect => self.level_select(key, app, ui),
            View::Play => self.play(key, app, ui),
            View::Editor => self.editor(key, ui),
        }
    }

    fn menu(&self, key: KeyEvent, ui: &mut UiState) -> KeyAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => ui.move_menu(-1),
            KeyCode::Down | KeyCode::Char('j') => ui.move_menu(1),
            KeyCode::Enter => return KeyAction::Dispatch(ui.menu_entry().action()),
            KeyCode::Esc | KeyCode::Char('q') => return KeyAction::Quit,
            _ => {}
        }
        KeyAction::None
    }

    fn settings(&self, key: KeyEvent, app: &App, ui: &mut UiState) -> KeyAction {
        let field = ui.settings_field();

        if let Some(buffer) = ui.color_edit.as_mut() {
            match key.code {
                KeyCode::Char(ch) if ch.is_ascii_hexdigit() || (ch == '#' && buffer.is_empty()) => {
                    if buffer.len() < COLOR_BUFFER_LEN {
                        buffer.push(ch.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let mut value = ui.color_edit.take().unwrap_or_default();
                    if !value.starts_with('#') {
                        value.insert(0, '#');
                    }
                    return KeyAction::Dispatch(match field {
                        SettingsField::SecondaryColor => AppAction::SetSecondaryColor(value),
                        _ => AppAction::SetPrimaryColor(value),
                    });
                }
                KeyCode::Esc => ui.color_edit = None,
                _ => {}
            }
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => ui.move_settings(-1),
            KeyCode::Down | KeyCode::Char('j') => ui.move_settings(1),
            KeyCode::Left | KeyCode::Right => {
                let sign = if key.code == KeyCode::Left { -1 } else { 1 };
                return match field {
                    SettingsField::Speed => KeyAction::Dispatch(AppAction::NudgeSpeed(sign)),
                    SettingsField::Volume => {
                        KeyAction::Dispatch(AppAction::NudgeVolume(sign * VOLUME_KEY_STEPS))
                    }
                    _ => KeyAction::None,
                };
            }
            KeyCode::Enter => match field {
                SettingsField::PrimaryColor => {
                    ui.color_edit = Some(app.settings().primary_color.clone());
                }
                SettingsField::SecondaryColor => {
                    ui.color_edit = Some(app.settings().secondary_color.clone());
                }
                SettingsField::FactoryReset => return KeyAction::Dispatch(AppAction::FactoryReset),
                SettingsField::Save => return KeyAction::Dispatch(AppAction::SaveSettings),
                SettingsField::Speed | SettingsField::Volume => {}
            },
            KeyCode::Char('r') => return KeyAction::Dispatch(AppAction::FactoryReset),
            KeyCode::Char('s') => return KeyAction::Dispatch(AppAction::SaveSettings),
            KeyCode::Esc => return KeyAction::Dispatch(AppAction::BackToMenu),
            _ => {}
        }
        KeyAction::None
    }

    fn level_select(&self, key: KeyEvent, app: &App, ui: &mut UiState) -> KeyAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => ui.move_level(-1, app.levels().len()),
            KeyCode::Down | KeyCode::Char('j') => ui.move_level(1, app.levels().len()),
            KeyCode::Enter => {
                if let Some(level) = ui.selected_level(app) {
                    return KeyAction::Dispatch(AppAction::Deploy { level_id: level.id });
                }
            }
            KeyCode::Char('e') => {
                if let Some(level) = ui.selected_level(app).filter(|l| app.can_edit(&l.id)) {
                    return KeyAction::Dispatch(AppAction::EditLevel { level_id: level.id });
                }
            }
            KeyCode::Char('n') => return KeyAction::Dispatch(AppAction::NewLevel),
            KeyCode::Char('g') => return KeyAction::Dispatch(AppAction::OpenAiModal),
            KeyCode::Esc | KeyCode::Char('b') => return KeyAction::Dispatch(AppAction::BackToMenu),
            _ => {}
        }
        KeyAction::None
    }

    fn ai_modal(&self, key: KeyEvent, app: &App) -> KeyAction {
        let workflow = app.generation();

        match workflow.phase() {
            GenerationPhase::Requesting { .. } => match key.code {
                KeyCode::Esc => KeyAction::Dispatch(AppAction::AbortGeneration),
                _ => KeyAction::None,
            },
            GenerationPhase::Error { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => {
                    KeyAction::Dispatch(AppAction::RetryGeneration)
                }
                KeyCode::Esc | KeyCode::Char('b') => KeyAction::Dispatch(AppAction::ReturnToBase),
                _ => KeyAction::None,
            },
            GenerationPhase::Idle | GenerationPhase::Success { .. } => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match key.code {
                        KeyCode::Char('x') => KeyAction::Dispatch(AppAction::ExitAiToMenu),
                        _ => KeyAction::None,
                    };
                }

                match key.code {
                    KeyCode::Char(ch) => {
                        let mut prompt = workflow.prompt().to_string();
                        prompt.push(ch);
                        KeyAction::Dispatch(AppAction::SetPrompt(prompt))
                    }
                    KeyCode::Backspace => {
                        let mut prompt = workflow.prompt().to_string();
                        if prompt.pop().is_none() {
                            return KeyAction::None;
                        }
                        KeyAction::Dispatch(AppAction::SetPrompt(prompt))
                    }
                    KeyCode::Enter if workflow.can_submit() => {
                        KeyAction::Dispatch(AppAction::SubmitPrompt)
                    }
                    KeyCode::Esc => KeyAction::Dispatch(AppAction::CloseAiModal),
                    _ => KeyAction::None,
                }
            }
        }
    }

    fn play(&self, key: KeyEvent, app: &App, ui: &mut UiState) -> KeyAction {
        let paused = app.play().is_some_and(|session| session.is_paused());

        match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') if !paused => {
                if let Some(runner) = ui.runner.as_mut() {
                    runner.jump();
                }
                KeyAction::None
            }
            KeyCode::Enter if paused => KeyAction::Dispatch(AppAction::Restart),
            KeyCode::Char('r') => KeyAction::Dispatch(AppAction::Restart),
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Dispatch(AppAction::QuitPlay),
            _ => KeyAction::None,
        }
    }

    fn editor(&self, key: KeyEvent, ui: &mut UiState) -> KeyAction {
        let Some(workshop) = ui.workshop.as_mut() else {
            return match key.code {
                KeyCode::Esc => KeyAction::Dispatch(AppAction::ExitEditor),
                _ => KeyAction::None,
            };
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => KeyAction::Dispatch(AppAction::SaveLevel(workshop.to_level())),
                _ => KeyAction::None,
            };
        }

        if workshop.is_browsing() {
            match key.code {
                KeyCode::Up => workshop.browse_history(-1),
                KeyCode::Down => workshop.browse_history(1),
                KeyCode::Enter => {
                    workshop.import_selected();
                }
                KeyCode::Esc | KeyCode::Char('h') => workshop.toggle_history(),
                _ => {}
            }
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Left => workshop.move_cursor(-1, 0),
            KeyCode::Right => workshop.move_cursor(1, 0),
            KeyCode::Up => workshop.move_cursor(0, -1),
            KeyCode::Down => workshop.move_cursor(0, 1),
            KeyCode::Tab => workshop.cycle_palette(true),
            KeyCode::BackTab => workshop.cycle_palette(false),
            KeyCode::Char(' ') | KeyCode::Enter => workshop.place(),
            KeyCode::Char('x') | KeyCode::Backspace | KeyCode::Delete => {
                workshop.remove();
            }
            KeyCode::Char('h') => workshop.toggle_history(),
            KeyCode::Esc => return KeyAction::Dispatch(AppAction::ExitEditor),
            _ => {}
        }
        KeyAction::None
    }
}

/// Key hints for the footer, in display order.
pub fn key_hints(app: &App, ui: &UiState) -> Vec<(&'static str, &'static str)> {
    match app.view() {
        View::Menu => vec![("↑↓", "select"), ("Enter", "open"), ("q", "quit")],
        View::Settings if ui.color_edit.is_some() => {
            vec![("hex", "type"), ("Enter", "apply"), ("Esc", "cancel")]
        }
        View::Settings => vec![
            ("↑↓", "field"),
            ("←→", "adjust"),
            ("Enter", "edit"),
            ("r", "reset"),
            ("s", "save"),
            ("Esc", "menu"),
        ],
        View::LevelSelect if app.is_ai_modal_open() => match app.generation().phase() {
            GenerationPhase::Requesting { .. } => vec![("Esc", "abort")],
            GenerationPhase::Error { .. } => vec![("Enter", "retry"), ("Esc", "return to base")],
            _ => {
                let mut hints = vec![("type", "prompt")];
                if app.generation().can_submit() {
                    hints.push(("Enter", "synthesize"));
                }
                hints.extend([("Esc", "close"), ("^X", "menu")]);
                hints
            }
        },
        View::LevelSelect => {
            let mut hints = vec![("↑↓", "select"), ("Enter", "deploy")];
            if ui.selected_level(app).is_some_and(|l| app.can_edit(&l.id)) {
                hints.push(("e", "edit"));
            }
            hints.extend([("n", "new"), ("g", "AI synthesis"), ("Esc", "menu")]);
            hints
        }
        View::Play if app.play().is_some_and(|s| s.is_paused()) => {
            vec![("Enter", "retry"), ("Esc", "levels")]
        }
        View::Play => vec![("Space", "jump"), ("r", "restart"), ("Esc", "levels")],
        View::Editor if ui.workshop.as_ref().is_some_and(|w| w.is_browsing()) => {
            vec![("↑↓", "entry"), ("Enter", "import"), ("Esc", "close")]
        }
        View::Editor => vec![
            ("arrows", "move"),
            ("Tab", "palette"),
            ("Space", "place"),
            ("x", "remove"),
            ("h", "history"),
            ("^S", "save"),
            ("Esc", "menu"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use runtime::{InMemoryRecordRepository, ManualClock};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    fn app() -> App {
        App::builder()
            .repository(Arc::new(InMemoryRecordRepository::new()))
            .clock(Arc::new(ManualClock::new(5_000)))
            .build()
            .expect("in-memory app")
    }

    /// Feed a key and apply any decoded action.
    fn press(app: &mut App, ui: &mut UiState, event: KeyEvent) -> KeyAction {
        let action = InputHandler::new().handle_key(event, app, ui);
        if let KeyAction::Dispatch(decoded) = &action {
            app.dispatch(decoded.clone()).expect("decoded action is available");
        }
        ui.sync(app, 5_000);
        action
    }

    #[tokio::test]
    async fn menu_navigation_and_quit() {
        let mut app = app();
        let mut ui = UiState::new();

        press(&mut app, &mut ui, key(KeyCode::Down));
        press(&mut app, &mut ui, key(KeyCode::Down));
        let action = press(&mut app, &mut ui, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::Dispatch(AppAction::OpenSettings));
        assert_eq!(app.view(), View::Settings);

        press(&mut app, &mut ui, key(KeyCode::Esc));
        assert_eq!(
            press(&mut app, &mut ui, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[tokio::test]
    async fn settings_keys_adjust_and_edit_colors() {
        let mut app = app();
        let mut ui = UiState::new();
        app.dispatch(AppAction::OpenSettings).unwrap();

        press(&mut app, &mut ui, key(KeyCode::Right));
        assert_eq!(app.settings().speed, 5.5);

        ui.settings_index = 2;
        press(&mut app, &mut ui, key(KeyCode::Enter));
        assert_eq!(ui.color_edit.as_deref(), Some("#00f2ff"));
        for _ in 0..6 {
            press(&mut app, &mut ui, key(KeyCode::Backspace));
        }
        for ch in "12ab3z4".chars() {
            press(&mut app, &mut ui, key(KeyCode::Char(ch)));
        }
        assert_eq!(ui.color_edit.as_deref(), Some("#12ab34"));

        press(&mut app, &mut ui, key(KeyCode::Enter));
        assert_eq!(app.settings().primary_color, "#12ab34");
        assert!(ui.color_edit.is_none());
    }

    #[tokio::test]
    async fn prompt_is_typed_into_the_workflow() {
        let mut app = app();
        let mut ui = UiState::new();
        app.dispatch(AppAction::OpenLevelSelect).unwrap();
        press(&mut app, &mut ui, key(KeyCode::Char('g')));
        assert!(app.is_ai_modal_open());

        assert_eq!(
            InputHandler::new().handle_key(key(KeyCode::Enter), &app, &mut ui),
            KeyAction::None
        );

        for ch in "icy".chars() {
            press(&mut app, &mut ui, key(KeyCode::Char(ch)));
        }
        press(&mut app, &mut ui, key(KeyCode::Backspace));
        assert_eq!(app.generation().prompt(), "ic");

        press(&mut app, &mut ui, ctrl('x'));
        assert_eq!(app.view(), View::Menu);
    }

    #[tokio::test]
    async fn play_keys_drive_runner_and_session() {
        let mut app = app();
        let mut ui = UiState::new();
        app.dispatch(AppAction::OpenLevelSelect).unwrap();
        press(&mut app, &mut ui, key(KeyCode::Enter));
        assert_eq!(app.view(), View::Play);

        press(&mut app, &mut ui, key(KeyCode::Char(' ')));
        let runner = ui.runner.as_mut().expect("runner for active session");
        runner.step();
        assert!(!runner.is_grounded());

        press(&mut app, &mut ui, key(KeyCode::Esc));
        assert_eq!(app.view(), View::LevelSelect);
        assert!(ui.runner.is_none());
    }

    #[tokio::test]
    async fn editor_save_produces_custom_level() {
        let mut app = app();
        let mut ui = UiState::new();
        app.dispatch(AppAction::OpenWorkshop).unwrap();
        ui.sync(&app, 5_000);

        press(&mut app, &mut ui, key(KeyCode::Right));
        press(&mut app, &mut ui, key(KeyCode::Char(' ')));
        let action = press(&mut app, &mut ui, ctrl('s'));

        let KeyAction::Dispatch(AppAction::SaveLevel(level)) = action else {
            panic!("expected SaveLevel, got {action:?}");
        };
        assert_eq!(level.id, "custom-5000");
        assert_eq!(level.objects.len(), 1);
        assert_eq!(app.view(), View::LevelSelect);
        assert!(app.custom_levels().iter().any(|l| l.id == "custom-5000"));
    }

    #[tokio::test]
    async fn hints_follow_view() {
        let mut app = app();
        let ui = UiState::new();
        assert!(key_hints(&app, &ui).contains(&("q", "quit")));

        app.dispatch(AppAction::OpenLevelSelect).unwrap();
        app.dispatch(AppAction::OpenAiModal).unwrap();
        assert!(key_hints(&app, &ui).contains(&("^X", "menu")));
        assert!(!key_hints(&app, &ui).contains(&("Enter", "synthesize")));

        app.dispatch(AppAction::SetPrompt("   ".into())).unwrap();
        assert!(!key_hints(&app, &ui).contains(&("Enter", "synthesize")));

        app.dispatch(AppAction::SetPrompt("lava".into())).unwrap();
        assert!(key_hints(&app, &ui).contains(&("Enter", "synthesize")));
    }

    #[tokio::test]
    async fn edit_is_only_offered_on_custom_levels() {
        let mut app = app();
        let mut ui = UiState::new();
        app.dispatch(AppAction::OpenLevelSelect).unwrap();
        ui.sync(&app, 5_000);

        assert_eq!(ui.selected_level(&app).map(|l| l.id), Some("1".to_string()));
        assert!(!key_hints(&app, &ui).contains(&("e", "edit")));
        assert_eq!(press(&mut app, &mut ui, key(KeyCode::Char('e'))), KeyAction::None);
        assert_eq!(app.view(), View::LevelSelect);

        // Author a custom level, then select it
        press(&mut app, &mut ui, key(KeyCode::Char('n')));
        press(&mut app, &mut ui, key(KeyCode::Char(' ')));
        press(&mut app, &mut ui, ctrl('s'));
        assert_eq!(app.view(), View::LevelSelect);

        // Built-in levels stay read-only even once custom ones exist
        assert!(!key_hints(&app, &ui).contains(&("e", "edit")));
        assert_eq!(press(&mut app, &mut ui, key(KeyCode::Char('e'))), KeyAction::None);

        ui.level_index = app.levels().len() - 1;
        assert!(key_hints(&app, &ui).contains(&("e", "edit")));
        let action = press(&mut app, &mut ui, key(KeyCode::Char('e')));
        assert_eq!(
            action,
            KeyAction::Dispatch(AppAction::EditLevel {
                level_id: "custom-5000".into()
            })
        );
        assert_eq!(app.view(), View::Editor);
        assert_eq!(app.editor_level().map(|l| l.id.as_str()), Some("custom-5000"));
    }
}

//! Keyboard input handling.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::KeyAction;

impl EventLoop {
    /// Drain pending terminal events. Returns true when the user quits.
    pub(in crate::event) fn handle_input_tick(&mut self) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.apply_key(key) {
                        return Ok(true);
                    }
                }
                // Resize redraws on the next frame
                _ => {}
            }
        }
        Ok(false)
    }

    /// Apply one key press. Returns true when the user quits.
    pub(in crate::event) fn apply_key(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key, &self.app, &mut self.ui) {
            KeyAction::Quit => {
                self.messages.push_text("Cutting the strings...");
                true
            }
            KeyAction::Dispatch(action) => {
                self.dispatch(action);
                false
            }
            KeyAction::None => false,
        }
    }
}

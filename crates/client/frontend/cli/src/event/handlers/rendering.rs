//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            app: &self.app,
            ui: &self.ui,
            messages: &self.messages,
            cli_config: &self.cli_config,
        };

        ui::render(terminal, &ctx)
    }
}

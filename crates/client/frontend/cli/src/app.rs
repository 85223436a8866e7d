//! Glue code tying the application controller and terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use runtime::{App, Clock, SystemClock};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig};

/// Terminal frontend built on ratatui and crossterm.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    clock: Arc<dyn Clock>,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Clock used for editor level ids.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, app: App) -> Result<App> {
        tracing::info!("CLI frontend starting...");

        let mut event_loop = EventLoop::new(
            app,
            &self.frontend_config,
            self.cli_config.clone(),
            Arc::clone(&self.clock),
        );
        event_loop
            .messages
            .push_text("Welcome, puppeteer. Choose a sequence to begin.");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let app = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(app)
    }
}

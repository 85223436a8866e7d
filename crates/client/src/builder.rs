//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use runtime::App;

/// Builder for constructing a Client with proper validation.
///
/// Both the controller and the frontend are required; missing either
/// fails `build()`.
#[derive(Default)]
pub struct ClientBuilder {
    app: Option<App>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application controller (required).
    ///
    /// Construct it via [`App::builder`], which loads persisted records.
    pub fn app(mut self, app: App) -> Self {
        self.app = Some(app);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the app or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let app = self
            .app
            .context("App is required. Use .app() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { app, frontend })
    }
}

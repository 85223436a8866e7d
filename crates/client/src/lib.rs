//! Top-level client wiring the application controller to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ App (view state machine, records, generation, sessions)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client owns neither game rules nor rendering; it hands the [`App`]
//! to the frontend for the lifetime of the UI and logs what comes back.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::App;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives the controller and frontend
/// 2. `Client::run()` transfers control to the frontend until the user quits
/// 3. The returned controller is dropped, stopping any in-flight generation feed
pub struct Client {
    app: App,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error if it fails.
    pub async fn run(self) -> Result<App> {
        let Client { app, mut frontend } = self;

        let app = frontend.run(app).await?;

        tracing::info!(
            view = %app.view(),
            custom_levels = app.custom_levels().len(),
            "Frontend exited"
        );
        Ok(app)
    }
}

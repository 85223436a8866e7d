//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::App;

/// Frontend abstraction for UI layers.
///
/// Frontends drive the application controller:
/// - Render the current view and offer only [`App::available_actions`]
/// - Translate user input into [`runtime::AppAction`]s and dispatch them
/// - Feed generation events from [`App::take_generation_events`] back into
///   [`App::handle_generation_event`]
/// - Host the gameplay and editor collaborators for the play and editor views
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::App;
/// use anyhow::Result;
///
/// struct MyFrontend;
///
/// #[async_trait]
/// impl Frontend for MyFrontend {
///     async fn run(&mut self, mut app: App) -> Result<App> {
///         let mut events = app.take_generation_events().expect("fresh app");
///
///         while let Some(event) = events.recv().await {
///             app.handle_generation_event(event);
///             // Render UI, handle input, etc.
///         }
///
///         Ok(app)
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// Takes ownership of the controller and hands it back on a clean exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, app: App) -> Result<App>;
}

//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator that coordinates
//! generation events, user input, the gameplay runner, and UI updates.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;

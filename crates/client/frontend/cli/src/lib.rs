//! Terminal UI frontend for Puppet Dash.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a UI layer over the application controller that:
//! - Owns the `App` for the duration of the terminal session
//! - Translates keys into `AppAction`s and feeds generation events back
//! - Hosts the track runner and workshop collaborators for play and editing

mod app;
mod collaborators;
mod config;
mod cursor;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use collaborators::{RunSignal, TrackRunner, Workshop};
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;

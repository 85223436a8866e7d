//! Application controller for Puppet Dash.
//!
//! This crate owns everything in the game that has state and a lifecycle:
//! persisted records, the prompt-driven level generation workflow, play
//! sessions, and the view state machine that routes user intents between
//! them. Frontends embed an [`App`], dispatch [`AppAction`]s, and feed it the
//! [`GenerationEvent`]s it emits.
//!
//! Modules are organized by responsibility:
//! - [`app`] hosts the view state machine and its builder
//! - [`stores`] wrap the persisted records with typed, recovering access
//! - [`generation`] runs requests against a [`LevelGenerator`]
//! - [`session`] mints and tracks play sessions
//! - [`repository`] moves raw records in and out of storage
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod generation;
pub mod repository;
pub mod session;
pub mod stores;

pub use app::{ActionKind, App, AppAction, AppBuilder, TransitionError, View};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use generation::{
    GeneratedLevel, GenerationError, GenerationEvent, GenerationOutcome, GenerationPhase,
    GenerationWorkflow, LevelGenerator, ProceduralGenerator, ProgressLog,
};
pub use repository::{
    FileRecordRepository, InMemoryRecordRepository, RecordKey, RecordRepository, RepositoryError,
};
pub use session::{ActiveSession, GameSessionController, SessionEnd, SessionId};
pub use stores::{HistoryStore, LevelStore, SettingsStore};

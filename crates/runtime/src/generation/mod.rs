//! Natural-language level generation.
//!
//! [`GenerationWorkflow`] owns the request lifecycle (Idle, Requesting,
//! Success, Error) and the cosmetic [`ProgressLog`]. The generator itself is
//! a collaborator behind [`LevelGenerator`]; [`ProceduralGenerator`] is the
//! offline implementation used by the client.

mod error;
mod generator;
mod procedural;
mod progress;
mod workflow;

pub use error::{FALLBACK_MESSAGE, GenerationError};
pub use generator::{GeneratedLevel, LevelGenerator};
pub use procedural::{ProceduralGenerator, compose};
pub use progress::{
    DEFAULT_PROGRESS_CAPACITY, DEFAULT_PROGRESS_INTERVAL, PROGRESS_MESSAGES, ProgressFeed,
    ProgressLog,
};
pub use workflow::{
    GenerationEvent, GenerationOutcome, GenerationPhase, GenerationWorkflow, RequestTicket,
    WorkflowSettings,
};

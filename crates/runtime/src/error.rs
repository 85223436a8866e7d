//! Errors surfaced by the runtime API.
use thiserror::Error;

pub use crate::app::TransitionError;
pub use crate::generation::GenerationError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by record repositories and the stores built on them.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in record '{key}': {message}")]
    Json { key: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

//! Failure reported by the level generation collaborator.

use thiserror::Error;

/// Message shown when the collaborator fails without explaining why.
pub const FALLBACK_MESSAGE: &str = "The Puppet AI link was interrupted. This usually happens if \
the prompt is too complex or violates safety protocols.";

/// A failed generation request.
///
/// Carries the collaborator's human-readable message when it supplied one.
/// Empty or malformed responses are reported the same way, without a message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
pub struct GenerationError {
    message: Option<String>,
}

impl GenerationError {
    /// Failure with a message to show the user verbatim.
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// Failure without an explanation.
    pub fn unexplained() -> Self {
        Self { message: None }
    }

    /// The collaborator-supplied message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Text shown to the user: the collaborator's message or the fallback.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

use thiserror::Error;

use super::action::{ActionKind, View};

/// A dispatched action that the current state cannot honor.
///
/// Frontends only offer [`App::available_actions`](super::App::available_actions),
/// so any of these reaching the caller indicates a frontend defect.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("no level with id '{0}'")]
    UnknownLevel(String),

    #[error("level '{0}' is built in and cannot be edited")]
    NotEditable(String),

    #[error("{action} is not available in {view}")]
    NotAvailable { action: ActionKind, view: View },
}

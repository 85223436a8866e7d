//! Shared status log primitives for CLI and future UIs.
use std::collections::VecDeque;

use runtime::{GenerationOutcome, TransitionError};

/// Severity level for status messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Epoch milliseconds, when known.
    pub timestamp: Option<i64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, timestamp: Option<i64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            timestamp,
            level,
        }
    }

    /// Status line for a resolved generation request.
    pub fn from_outcome(outcome: &GenerationOutcome) -> Self {
        match outcome {
            GenerationOutcome::Generated(level) => Self::new(
                format!(
                    "Synthesized '{}' ({} objects)",
                    level.name,
                    level.objects.len()
                ),
                None,
                MessageLevel::Info,
            ),
            GenerationOutcome::Failed { message } => {
                Self::new(message.clone(), None, MessageLevel::Error)
            }
        }
    }

    /// Status line for an action the controller refused.
    pub fn from_rejection(error: &TransitionError) -> Self {
        let level = match error {
            TransitionError::NotAvailable { .. } => MessageLevel::Error,
            TransitionError::UnknownLevel(_) | TransitionError::NotEditable(_) => {
                MessageLevel::Warning
            }
        };
        Self::new(error.to_string(), None, level)
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Warning));
    }

    /// Most recent first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

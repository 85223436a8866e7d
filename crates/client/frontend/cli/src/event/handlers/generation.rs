//! Generation event delivery.

use client_frontend_core::MessageEntry;
use runtime::GenerationEvent;

use super::super::EventLoop;

impl EventLoop {
    /// Feed a workflow event to the controller and log its outcome.
    pub(in crate::event) fn handle_generation_event(&mut self, event: GenerationEvent) {
        if let Some(outcome) = self.app.handle_generation_event(event) {
            self.messages.push(MessageEntry::from_outcome(&outcome));
            self.sync();
        }
    }
}

//! Per-frame gameplay stepping.

use runtime::AppAction;

use super::super::EventLoop;
use crate::collaborators::RunSignal;

impl EventLoop {
    /// Step the runner once and report a finished run to the controller.
    ///
    /// The signal carries the runner's session id, so a result from a run
    /// that was restarted or quit in the meantime is ignored upstream.
    pub(in crate::event) fn advance_frame(&mut self) {
        let Some(runner) = self.ui.runner.as_mut() else {
            return;
        };
        let session = runner.session();
        let Some(signal) = runner.step() else {
            return;
        };

        let (action, notice) = match signal {
            RunSignal::GameOver { coins } => (
                AppAction::GameOver { session, coins },
                format!("Strings cut with {coins} coins"),
            ),
            RunSignal::Won { coins } => (
                AppAction::Win { session, coins },
                format!("Level complete with {coins} coins"),
            ),
        };
        tracing::info!(%session, ?signal, "Run ended");
        self.messages.push_text(notice);
        self.dispatch(action);
    }
}

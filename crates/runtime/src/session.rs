//! Play-session bookkeeping.
//!
//! Every attempt at a level gets a fresh [`SessionId`]. Frontends use it as
//! the remount key of the gameplay collaborator: a new id means a new
//! simulation, even when the same level is replayed.

use std::fmt;
use std::sync::Arc;

use game_core::LevelData;

use crate::clock::Clock;

/// Identifier of one play attempt: creation time in epoch milliseconds,
/// strictly increasing within a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(i64);

impl SessionId {
    pub fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// How an attempt ended, if it has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Won,
}

/// State of the attempt currently on screen.
#[derive(Clone, Debug)]
pub struct ActiveSession {
    id: SessionId,
    level: LevelData,
    end: Option<SessionEnd>,
    coins: u32,
}

impl ActiveSession {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn level(&self) -> &LevelData {
        &self.level
    }

    pub fn is_game_over(&self) -> bool {
        self.end == Some(SessionEnd::GameOver)
    }

    pub fn is_won(&self) -> bool {
        self.end == Some(SessionEnd::Won)
    }

    pub fn end(&self) -> Option<SessionEnd> {
        self.end
    }

    /// The gameplay collaborator must stay paused once the attempt has ended.
    pub fn is_paused(&self) -> bool {
        self.end.is_some()
    }

    /// Coins recorded when the attempt ended; zero while it is running.
    pub fn coins(&self) -> u32 {
        self.coins
    }
}

/// Starts, restarts, and ends play sessions.
pub struct GameSessionController {
    clock: Arc<dyn Clock>,
    active: Option<ActiveSession>,
    last_id: Option<SessionId>,
}

impl GameSessionController {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            active: None,
            last_id: None,
        }
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.active.as_ref().is_some_and(ActiveSession::is_paused)
    }

    /// Begin a fresh attempt at `level`, discarding any previous one.
    pub fn start(&mut self, level: LevelData) -> SessionId {
        let id = self.mint_id();
        tracing::info!(%id, level = %level.id, "Session started");

        self.active = Some(ActiveSession {
            id,
            level,
            end: None,
            coins: 0,
        });
        id
    }

    /// Begin a fresh attempt at the level currently loaded.
    ///
    /// Returns `None` when no session exists.
    pub fn restart(&mut self) -> Option<SessionId> {
        let level = self.active.take()?.level;
        Some(self.start(level))
    }

    /// Record a failed attempt. Ignored unless a session is running.
    pub fn on_game_over(&mut self, coins: u32) -> bool {
        self.finish(SessionEnd::GameOver, coins)
    }

    /// Record a completed attempt. Ignored unless a session is running.
    pub fn on_win(&mut self, coins: u32) -> bool {
        self.finish(SessionEnd::Won, coins)
    }

    /// Tear down the current session.
    pub fn end(&mut self) -> Option<ActiveSession> {
        let session = self.active.take();
        if let Some(session) = &session {
            tracing::info!(id = %session.id, "Session ended");
        }
        session
    }

    fn finish(&mut self, end: SessionEnd, coins: u32) -> bool {
        let Some(session) = self.active.as_mut() else {
            tracing::warn!(?end, "Terminal signal without an active session");
            return false;
        };
        if session.end.is_some() {
            tracing::warn!(id = %session.id, ?end, "Session already ended; signal ignored");
            return false;
        }

        session.end = Some(end);
        session.coins = coins;
        tracing::info!(id = %session.id, ?end, coins, "Session finished");
        true
    }

    fn mint_id(&mut self) -> SessionId {
        let now = self.clock.now_millis();
        let id = match self.last_id {
            Some(last) => SessionId(now.max(last.0 + 1)),
            None => SessionId(now),
        };
        self.last_id = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use game_core::builtin_levels;

    fn controller() -> (GameSessionController, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000));
        (GameSessionController::new(clock.clone()), clock)
    }

    #[test]
    fn start_mints_distinct_ids_and_resets() {
        let (mut sessions, _clock) = controller();
        let level = builtin_levels().remove(0);

        let first = sessions.start(level.clone());
        assert!(sessions.on_win(7));
        assert_eq!(sessions.active().map(ActiveSession::coins), Some(7));

        let second = sessions.start(level);
        assert_ne!(first, second);
        assert!(second > first);

        let active = sessions.active().unwrap();
        assert_eq!(active.coins(), 0);
        assert!(!active.is_game_over());
        assert!(!active.is_won());
    }

    #[test]
    fn ids_follow_the_clock_when_it_moves() {
        let (mut sessions, clock) = controller();
        let level = builtin_levels().remove(0);

        assert_eq!(sessions.start(level.clone()).as_millis(), 1_000);
        clock.advance(500);
        assert_eq!(sessions.start(level.clone()).as_millis(), 1_500);
        clock.set(200);
        assert_eq!(sessions.start(level).as_millis(), 1_501);
    }

    #[test]
    fn terminal_signals_need_running_session() {
        let (mut sessions, _clock) = controller();
        assert!(!sessions.on_game_over(1));

        sessions.start(builtin_levels().remove(1));
        assert!(sessions.on_game_over(3));
        assert!(sessions.is_paused());
        assert!(!sessions.on_win(9));

        let active = sessions.active().unwrap();
        assert!(active.is_game_over());
        assert_eq!(active.coins(), 3);
    }

    #[test]
    fn restart_keeps_level() {
        let (mut sessions, _clock) = controller();
        assert_eq!(sessions.restart(), None);

        let level = builtin_levels().remove(1);
        let first = sessions.start(level.clone());
        sessions.on_game_over(0);

        let second = sessions.restart().unwrap();
        assert_ne!(first, second);
        assert_eq!(sessions.active().unwrap().level(), &level);
        assert!(!sessions.is_paused());

        assert!(sessions.end().is_some());
        assert!(sessions.active().is_none());
    }
}

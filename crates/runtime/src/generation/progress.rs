//! Cosmetic progress feed shown while a generation request is in flight.
//!
//! The generation service reports no partial progress, so the feed is a
//! timer that cycles through fixed status lines. Ticks are delivered to the
//! controller's event channel tagged with the request they belong to; the
//! controller applies them to a bounded [`ProgressLog`].

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::workflow::{GenerationEvent, RequestTicket};

/// Default interval between progress messages.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(800);
/// Default number of messages kept in the rolling log.
pub const DEFAULT_PROGRESS_CAPACITY: usize = 5;

/// Status lines cycled by the feed, in order.
pub const PROGRESS_MESSAGES: [&str; 9] = [
    "INITIALIZING NEURAL CLUSTERS...",
    "SYNCING RHYTHM NODES...",
    "FOLDING SPACETIME GAPS...",
    "MAPPING PUPPET STRINGS...",
    "SYNTHESIZING GEOMETRIC DECAY...",
    "OPTIMIZING NEON FREQUENCIES...",
    "AWAKENING THE PUPPET CORE...",
    "INJECTING CHAOS VECTORS...",
    "VALIDATING PHYSICS CLUSTERS...",
];

// ============================================================================
// Rolling log
// ============================================================================

/// Rolling window over the most recent progress messages.
#[derive(Clone, Debug)]
pub struct ProgressLog {
    entries: VecDeque<&'static str>,
    capacity: usize,
    cursor: usize,
}

impl ProgressLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Append the next message in the cycle, evicting the oldest if full.
    pub fn advance(&mut self) -> &'static str {
        let message = PROGRESS_MESSAGES[self.cursor % PROGRESS_MESSAGES.len()];
        self.cursor += 1;

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
        message
    }

    /// Empty the log and restart the cycle from the first message.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Messages oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Timer task
// ============================================================================

/// Repeating timer task owned by the workflow for one request.
///
/// [`ProgressFeed::stop`] aborts the task; calling it again is a no-op, and
/// dropping the feed stops it as well.
#[derive(Debug)]
pub struct ProgressFeed {
    ticket: RequestTicket,
    task: Option<JoinHandle<()>>,
}

impl ProgressFeed {
    /// Start ticking every `interval`, first tick one interval from now.
    pub fn start(
        ticket: RequestTicket,
        interval: Duration,
        events: mpsc::UnboundedSender<GenerationEvent>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if events.send(GenerationEvent::Tick { ticket }).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(?ticket, "Progress feed started");

        Self {
            ticket,
            task: Some(task),
        }
    }

    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Cancel the timer. Returns true only for the call that actually stopped it.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                tracing::debug!(ticket = ?self.ticket, "Progress feed stopped");
                true
            }
            None => false,
        }
    }
}

impl Drop for ProgressFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_most_recent_messages() {
        let mut log = ProgressLog::new(DEFAULT_PROGRESS_CAPACITY);
        for _ in 0..7 {
            log.advance();
        }

        let entries: Vec<_> = log.entries().collect();
        assert_eq!(entries, PROGRESS_MESSAGES[2..7].to_vec());
    }

    #[test]
    fn log_cycles_through_messages() {
        let mut log = ProgressLog::new(2);
        for _ in 0..PROGRESS_MESSAGES.len() {
            log.advance();
        }
        assert_eq!(log.advance(), PROGRESS_MESSAGES[0]);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.advance(), PROGRESS_MESSAGES[0]);
    }

    #[tokio::test(start_paused = true)]
    async fn feed_ticks_on_interval_until_stopped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticket = RequestTicket::first();
        let mut feed = ProgressFeed::start(ticket, Duration::from_millis(800), tx);

        time::sleep(Duration::from_millis(799)).await;
        assert!(rx.try_recv().is_err());

        time::sleep(Duration::from_millis(1700)).await;
        let mut ticks = 0;
        while let Ok(GenerationEvent::Tick { ticket: t }) = rx.try_recv() {
            assert_eq!(t, ticket);
            ticks += 1;
        }
        assert_eq!(ticks, 3);

        assert!(feed.stop());
        assert!(!feed.stop());
        assert!(!feed.is_running());

        time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}

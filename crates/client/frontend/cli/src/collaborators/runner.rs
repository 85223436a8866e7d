//! Minimal gameplay collaborator for the terminal.
//!
//! Auto-scrolls the player along the level at the configured speed using
//! the game's gravity and jump constants. Spikes and block sides end the
//! run, block tops can be landed on, and coins are collected on contact.
//! Running past the last object wins. Portals are decorative.

use std::collections::HashSet;

use game_core::{GameConfig, GameObject, LevelData, ObjectKind, UserSettings};
use runtime::SessionId;

/// Resting `y` of the player on the ground.
const GROUND_TOP: f64 = GameConfig::GROUND_Y - GameConfig::PLAYER_SIZE;
/// Spike hitbox inset from its 40x40 cell.
const SPIKE_INSET_X: f64 = 12.0;
const SPIKE_INSET_TOP: f64 = 16.0;
/// Coin hitbox inset from its cell.
const COIN_INSET: f64 = 10.0;

/// Terminal signal emitted once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunSignal {
    GameOver { coins: u32 },
    Won { coins: u32 },
}

#[derive(Clone, Copy, Debug)]
struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// One simulated attempt, bound to the session it was built for.
#[derive(Debug)]
pub struct TrackRunner {
    session: SessionId,
    objects: Vec<GameObject>,
    speed: f64,
    finish_line: f64,

    distance: f64,
    y: f64,
    vy: f64,
    grounded: bool,
    jump_queued: bool,
    collected: HashSet<String>,
    finished: bool,
}

impl TrackRunner {
    pub fn new(session: SessionId, level: &LevelData, settings: &UserSettings) -> Self {
        Self {
            session,
            objects: level.objects.clone(),
            speed: settings.speed,
            finish_line: level.track_length(),
            distance: 0.0,
            y: GROUND_TOP,
            vy: 0.0,
            grounded: true,
            jump_queued: false,
            collected: HashSet::new(),
            finished: false,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// World `x` of the player's left edge.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// World `y` of the player's top edge.
    pub fn player_y(&self) -> f64 {
        self.y
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn coins(&self) -> u32 {
        self.collected.len() as u32
    }

    pub fn is_collected(&self, object_id: &str) -> bool {
        self.collected.contains(object_id)
    }

    /// Fraction of the track covered, 0.0–1.0.
    pub fn progress(&self) -> f64 {
        if self.finish_line <= 0.0 {
            return 1.0;
        }
        (self.distance / self.finish_line).clamp(0.0, 1.0)
    }

    /// Request a jump on the next step; ignored while airborne.
    pub fn jump(&mut self) {
        self.jump_queued = true;
    }

    /// Advance one frame. Returns the terminal signal on the frame the run ends.
    pub fn step(&mut self) -> Option<RunSignal> {
        if self.finished {
            return None;
        }

        if self.jump_queued && self.grounded {
            self.vy = GameConfig::JUMP_FORCE;
            self.grounded = false;
        }
        self.jump_queued = false;

        let previous_bottom = self.y + GameConfig::PLAYER_SIZE;
        self.distance += self.speed;
        self.vy += GameConfig::GRAVITY;
        self.y += self.vy;
        self.grounded = false;

        if self.y >= GROUND_TOP {
            self.y = GROUND_TOP;
            self.vy = 0.0;
            self.grounded = true;
        }

        for index in 0..self.objects.len() {
            let object = &self.objects[index];
            let player = self.hitbox();

            match object.kind {
                ObjectKind::Block => {
                    let block = Rect::new(
                        object.x,
                        object.y,
                        GameConfig::BLOCK_SIZE,
                        GameConfig::BLOCK_SIZE,
                    );
                    if !player.overlaps(&block) {
                        continue;
                    }
                    if previous_bottom <= block.top && self.vy >= 0.0 {
                        self.y = block.top - GameConfig::PLAYER_SIZE;
                        self.vy = 0.0;
                        self.grounded = true;
                    } else {
                        return self.finish(RunSignal::GameOver { coins: self.coins() });
                    }
                }
                ObjectKind::Spike => {
                    let spike = Rect::new(
                        object.x + SPIKE_INSET_X,
                        object.y + SPIKE_INSET_TOP,
                        GameConfig::BLOCK_SIZE - 2.0 * SPIKE_INSET_X,
                        GameConfig::BLOCK_SIZE - SPIKE_INSET_TOP,
                    );
                    if player.overlaps(&spike) {
                        return self.finish(RunSignal::GameOver { coins: self.coins() });
                    }
                }
                ObjectKind::Coin => {
                    let coin = Rect::new(
                        object.x + COIN_INSET,
                        object.y + COIN_INSET,
                        GameConfig::BLOCK_SIZE - 2.0 * COIN_INSET,
                        GameConfig::BLOCK_SIZE - 2.0 * COIN_INSET,
                    );
                    if player.overlaps(&coin) && !self.collected.contains(&object.id) {
                        let id = object.id.clone();
                        self.collected.insert(id);
                    }
                }
                _ => {}
            }
        }

        if self.distance > self.finish_line {
            return self.finish(RunSignal::Won {
                coins: self.coins(),
            });
        }

        None
    }

    fn hitbox(&self) -> Rect {
        Rect::new(
            self.distance,
            self.y,
            GameConfig::PLAYER_SIZE,
            GameConfig::PLAYER_SIZE,
        )
    }

    fn finish(&mut self, signal: RunSignal) -> Option<RunSignal> {
        self.finished = true;
        tracing::debug!(session = %self.session, ?signal, "Run finished");
        Some(signal)
    }
}

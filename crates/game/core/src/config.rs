//! Compile-time game constants shared by the controller and its collaborators.

/// Physics and layout constants of the side-scrolling track.
///
/// Units are logical pixels and frames (60 frames per second).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig;

impl GameConfig {
    // ===== viewport =====
    pub const GAME_WIDTH: f64 = 800.0;
    pub const GAME_HEIGHT: f64 = 450.0;

    // ===== geometry =====
    pub const BLOCK_SIZE: f64 = 40.0;
    pub const PLAYER_SIZE: f64 = 36.0;
    /// Top edge of the ground; objects resting on the floor sit at `GROUND_Y - BLOCK_SIZE`.
    pub const GROUND_Y: f64 = 400.0;

    // ===== motion =====
    pub const GRAVITY: f64 = 0.8;
    pub const JUMP_FORCE: f64 = -12.0;
    pub const FORWARD_SPEED: f64 = 5.0;
    pub const FRAMES_PER_SECOND: f64 = 60.0;

    // ===== settings ranges =====
    pub const MIN_SPEED: f64 = 3.0;
    pub const MAX_SPEED: f64 = 12.0;
    pub const SPEED_STEP: f64 = 0.5;
    pub const MIN_VOLUME: f64 = 0.0;
    pub const MAX_VOLUME: f64 = 1.0;
    pub const VOLUME_STEP: f64 = 0.01;
    pub const DEFAULT_VOLUME: f64 = 0.5;
}

/// Default color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme;

impl Theme {
    pub const PRIMARY: &'static str = "#00f2ff";
    pub const SECONDARY: &'static str = "#ff00ea";
    pub const BACKGROUND: &'static str = "#0a0a0a";
    pub const SURFACE: &'static str = "#1a1a1a";
    pub const TEXT: &'static str = "#ffffff";
    pub const ACCENT: &'static str = "#7000ff";
}

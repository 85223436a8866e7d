//! Data model shared by the application controller and its collaborators.
//!
//! `game-core` defines the records the game persists (settings, custom
//! levels, generation history), the closed set of placeable object kinds,
//! and the constants the gameplay collaborators simulate against. It performs
//! no I/O; storage and orchestration live in the `runtime` crate.
pub mod builtin;
pub mod config;
pub mod history;
pub mod level;
pub mod settings;

pub use builtin::builtin_levels;
pub use config::{GameConfig, Theme};
pub use history::AiHistoryEntry;
pub use level::{
    AI_PREFIX, CUSTOM_PREFIX, Difficulty, GameObject, LevelData, ObjectKind, ai_level_id,
    custom_level_id, is_custom_id,
};
pub use settings::{UserSettings, format_hex_color, parse_hex_color};

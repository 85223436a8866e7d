//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub frames: FrameConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(frames: FrameConfig, messages: MessageConfig) -> Self {
        Self { frames, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FRAME_INTERVAL_MS` - Delay between frames and input polls (default: 16)
    /// - `STATUS_LOG_CAPACITY` - Status message log capacity (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("FRAME_INTERVAL_MS") {
            config.frames.interval = Duration::from_millis(ms.max(1));
        }

        if let Some(capacity) = read_env::<usize>("STATUS_LOG_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct FrameConfig {
    /// Time between frames; gameplay collaborators advance one step per frame.
    pub interval: Duration,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(16),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 32 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

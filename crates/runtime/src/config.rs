//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::generation::{DEFAULT_PROGRESS_CAPACITY, DEFAULT_PROGRESS_INTERVAL};
use crate::stores::DEFAULT_HISTORY_CAPACITY;

/// Configuration required to build the application controller.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding the persisted records.
    pub data_dir: PathBuf,
    /// Interval between progress-feed messages.
    pub progress_interval: Duration,
    /// Number of progress messages kept on screen.
    pub progress_capacity: usize,
    /// Number of generation results kept in history.
    pub history_capacity: usize,
    /// Artificial latency of the built-in procedural generator.
    pub generation_latency: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            progress_capacity: DEFAULT_PROGRESS_CAPACITY,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            generation_latency: Duration::from_millis(2400),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PUPPET_DASH_DATA_DIR` - Directory for persisted records (default: platform-specific)
    /// - `PROGRESS_INTERVAL_MS` - Progress feed interval (default: 800)
    /// - `PROGRESS_LOG_CAPACITY` - Progress messages kept (default: 5)
    /// - `AI_HISTORY_CAPACITY` - Generation history entries kept (default: 20)
    /// - `GENERATION_LATENCY_MS` - Procedural generator latency (default: 2400)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("PUPPET_DASH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(ms) = read_env::<u64>("PROGRESS_INTERVAL_MS") {
            config.progress_interval = Duration::from_millis(ms.max(1));
        }

        if let Some(capacity) = read_env::<usize>("PROGRESS_LOG_CAPACITY") {
            config.progress_capacity = capacity.max(1);
        }

        if let Some(capacity) = read_env::<usize>("AI_HISTORY_CAPACITY") {
            config.history_capacity = capacity.max(1);
        }

        if let Some(ms) = read_env::<u64>("GENERATION_LATENCY_MS") {
            config.generation_latency = Duration::from_millis(ms);
        }

        config
    }

    /// Use `data_dir` for persisted records.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

/// Platform data directory for the game.
///
/// - macOS: `~/Library/Application Support/puppet-dash`
/// - Linux: `~/.local/share/puppet-dash` (or `$XDG_DATA_HOME/puppet-dash`)
/// - Windows: `%APPDATA%\puppet-dash`
/// - Fallback: `./save_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "puppet-dash")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

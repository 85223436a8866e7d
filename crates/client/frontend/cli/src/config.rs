//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_STATUS_PANEL_HEIGHT` - Status panel height in lines (default: 6)
    /// - `CLI_TRACK_ROWS` - Rows used to draw the track (default: 11)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_STATUS_PANEL_HEIGHT") {
            config.ui.status_panel_height = height.max(3);
        }
        if let Some(rows) = read_env::<u16>("CLI_TRACK_ROWS") {
            config.ui.track_rows = rows.max(UiConfig::MIN_TRACK_ROWS);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of status panel in lines (including borders).
    pub status_panel_height: u16,
    /// Inner height of the track view, ground line included.
    pub track_rows: u16,
}

impl UiConfig {
    pub const MIN_TRACK_ROWS: u16 = 6;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_panel_height: 6,
            track_rows: 11,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! User preferences shared with the gameplay and editor collaborators.

use crate::config::{GameConfig, Theme};

/// Persisted user preferences.
///
/// Always fully populated: fields missing from a stored record are backfilled
/// from [`UserSettings::default`] during deserialization, which is how records
/// written before `volume` existed load with `volume = 0.5`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct UserSettings {
    /// Forward speed of the player, 3.0–12.0.
    pub speed: f64,
    /// Primary color as `#rrggbb`.
    pub primary_color: String,
    /// Secondary color as `#rrggbb`.
    pub secondary_color: String,
    /// Master volume, 0.0–1.0.
    pub volume: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            speed: GameConfig::FORWARD_SPEED,
            primary_color: Theme::PRIMARY.to_string(),
            secondary_color: Theme::SECONDARY.to_string(),
            volume: GameConfig::DEFAULT_VOLUME,
        }
    }
}

impl UserSettings {
    /// Returns a copy with every field forced into its valid range.
    ///
    /// Out-of-range numbers are clamped, non-finite numbers and malformed
    /// colors fall back to the default for that field. Valid settings are
    /// returned unchanged.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();

        self.speed = if self.speed.is_finite() {
            self.speed.clamp(GameConfig::MIN_SPEED, GameConfig::MAX_SPEED)
        } else {
            defaults.speed
        };

        self.volume = if self.volume.is_finite() {
            self.volume
                .clamp(GameConfig::MIN_VOLUME, GameConfig::MAX_VOLUME)
        } else {
            defaults.volume
        };

        if parse_hex_color(&self.primary_color).is_none() {
            self.primary_color = defaults.primary_color;
        }
        if parse_hex_color(&self.secondary_color).is_none() {
            self.secondary_color = defaults.secondary_color;
        }

        self
    }

    /// Returns true if no field needs normalization.
    pub fn is_valid(&self) -> bool {
        self.clone().normalized() == *self
    }

    /// Moves the speed by `steps` slider notches (0.5 each), clamped to range.
    pub fn nudge_speed(&self, steps: i32) -> Self {
        let speed = snap(
            self.speed + f64::from(steps) * GameConfig::SPEED_STEP,
            GameConfig::SPEED_STEP,
        );
        Self {
            speed: speed.clamp(GameConfig::MIN_SPEED, GameConfig::MAX_SPEED),
            ..self.clone()
        }
    }

    /// Moves the volume by `steps` slider notches (0.01 each), clamped to range.
    pub fn nudge_volume(&self, steps: i32) -> Self {
        let volume = snap(
            self.volume + f64::from(steps) * GameConfig::VOLUME_STEP,
            GameConfig::VOLUME_STEP,
        );
        Self {
            volume: volume.clamp(GameConfig::MIN_VOLUME, GameConfig::MAX_VOLUME),
            ..self.clone()
        }
    }

    /// Volume as a whole percentage, as shown by the settings view.
    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Rounds `value` to the nearest multiple of `step`.
fn snap(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Parses a `#rrggbb` color string into its RGB components.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Formats RGB components as a lowercase `#rrggbb` string.
pub fn format_hex_color((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

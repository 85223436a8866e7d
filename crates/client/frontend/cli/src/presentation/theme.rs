//! Ratatui styling driven by the player's color settings.

use client_frontend_core::MessageLevel;
use game_core::{ObjectKind, Theme, UserSettings, parse_hex_color};
use ratatui::style::{Color, Modifier, Style};

/// Converts `#rrggbb` to a terminal color, `Color::Reset` if malformed.
pub fn hex_color(value: &str) -> Color {
    parse_hex_color(value)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Reset)
}

/// Theme built from the current [`UserSettings`] colors.
#[derive(Clone, Copy, Debug)]
pub struct PuppetTheme {
    primary: Color,
    secondary: Color,
    accent: Color,
}

impl PuppetTheme {
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self {
            primary: hex_color(&settings.primary_color),
            secondary: hex_color(&settings.secondary_color),
            accent: hex_color(Theme::ACCENT),
        }
    }

    pub fn primary(&self) -> Color {
        self.primary
    }

    pub fn secondary(&self) -> Color {
        self.secondary
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    /// Selected row in menus and lists.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn player(&self) -> (char, Style) {
        (
            '■',
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn ground(&self) -> (char, Style) {
        ('▔', Style::default().fg(self.secondary))
    }

    /// Glyph and style for a placed object.
    pub fn object(&self, kind: ObjectKind) -> (char, Style) {
        let portal = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        match kind {
            ObjectKind::Block => ('█', Style::default().fg(self.secondary)),
            ObjectKind::Spike => ('▲', Style::default().fg(Color::LightRed)),
            ObjectKind::Coin => ('o', Style::default().fg(Color::Yellow)),
            ObjectKind::PortalShip => ('S', portal),
            ObjectKind::PortalBall => ('B', portal),
            ObjectKind::PortalUfo => ('U', portal),
            ObjectKind::PortalWave => ('W', portal),
            ObjectKind::PortalRobot => ('R', portal),
            ObjectKind::PortalSpider => ('X', portal),
            ObjectKind::PortalSwing => ('G', portal),
            ObjectKind::PortalJetpack => ('J', portal),
            ObjectKind::PortalCube => ('C', portal),
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }
}

//! Settings screen: speed, volume, colors, and the reset/save rows.

use client_frontend_core::format::{speed_label, volume_label};
use game_core::UserSettings;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::{PuppetTheme, hex_color};
use crate::state::{SettingsField, UiState};

const VOLUME_BAR_WIDTH: usize = 20;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    settings: &UserSettings,
    ui: &UiState,
    theme: &PuppetTheme,
) {
    let selected = ui.settings_field();
    let items: Vec<ListItem> = SettingsField::iter()
        .map(|field| {
            let mut spans = vec![Span::raw(format!("{:<16}", field.label()))];
            spans.extend(value_spans(field, settings, ui, field == selected));

            let style = if field == selected {
                theme.title()
            } else {
                Style::default()
            };
            let marker = if field == selected { "> " } else { "  " };
            spans.insert(0, Span::raw(marker));
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled("System Config", theme.title())),
    );
    frame.render_widget(list, area);
}

fn value_spans(
    field: SettingsField,
    settings: &UserSettings,
    ui: &UiState,
    selected: bool,
) -> Vec<Span<'static>> {
    match field {
        SettingsField::Speed => vec![Span::raw(speed_label(settings))],
        SettingsField::Volume => {
            let filled = usize::from(settings.volume_percent()) * VOLUME_BAR_WIDTH / 100;
            vec![
                Span::raw(format!(
                    "[{}{}] ",
                    "=".repeat(filled),
                    " ".repeat(VOLUME_BAR_WIDTH - filled)
                )),
                Span::raw(volume_label(settings)),
            ]
        }
        SettingsField::PrimaryColor | SettingsField::SecondaryColor => {
            let value = match field {
                SettingsField::PrimaryColor => &settings.primary_color,
                _ => &settings.secondary_color,
            };
            let mut spans = vec![
                Span::styled("██ ", Style::default().fg(hex_color(value))),
                Span::raw(value.clone()),
            ];
            if let Some(buffer) = ui.color_edit.as_ref().filter(|_| selected) {
                spans.push(Span::raw(format!("  -> {buffer}_")));
            }
            spans
        }
        SettingsField::FactoryReset | SettingsField::Save => Vec::new(),
    }
}

//! Main menu widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::PuppetTheme;
use crate::state::MenuEntry;

/// Render the title banner and menu entries.
pub fn render(frame: &mut Frame, area: Rect, selected: MenuEntry, theme: &PuppetTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("P U P P E T   D A S H", theme.title())),
        Line::from(Span::styled("pull the strings, mind the spikes", theme.dim())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let items: Vec<ListItem> = MenuEntry::iter()
        .map(|entry| {
            let style = if entry == selected {
                theme.highlight()
            } else {
                theme.border()
            };
            ListItem::new(Line::from(format!("  {}  ", entry.label())).alignment(Alignment::Center))
                .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title("Menu"),
    );
    frame.render_widget(list, chunks[1]);
}

//! Level listing with origin tags.

use client_frontend_core::format::{level_origin, level_summary};
use game_core::LevelData;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::presentation::theme::PuppetTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    levels: &[LevelData],
    selected: usize,
    theme: &PuppetTheme,
) {
    let items: Vec<ListItem> = levels
        .iter()
        .map(|level| {
            let origin = level_origin(level);
            let tag_style = match origin {
                "CORE" => theme.dim(),
                _ => Style::default().fg(theme.secondary()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{origin:<7}"), tag_style),
                Span::raw(level_summary(level)),
            ]))
        })
        .collect();

    let title = format!("Select Level ({})", levels.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(Span::styled(title, theme.title())),
        )
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected((!levels.is_empty()).then_some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

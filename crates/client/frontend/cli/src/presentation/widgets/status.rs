//! Status log panel and key-hint footer.

use client_frontend_core::{MessageEntry, MessageLog};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListDirection, ListItem, Paragraph},
};

use crate::presentation::theme::PuppetTheme;

/// Render the most recent messages, newest at the bottom.
pub fn render_messages(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &PuppetTheme) {
    let capacity = area.height.saturating_sub(2) as usize;
    let mut items: Vec<ListItem> = messages
        .recent(capacity)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    // Pad so the list stays bottom-anchored
    while items.len() < capacity {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title("Status"),
        )
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let key_style = Style::default().add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(" {label}")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn format_message(entry: &MessageEntry) -> String {
    match entry.timestamp {
        Some(ts) => format!("[{}] {}", ts, entry.text),
        None => entry.text.clone(),
    }
}

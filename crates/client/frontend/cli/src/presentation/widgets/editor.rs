//! Workshop screen: level header, track with cursor, palette, history browser.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use game_core::{GameObject, ObjectKind};

use crate::collaborators::Workshop;
use crate::presentation::theme::PuppetTheme;
use crate::presentation::widgets::track::{self, TrackScene, visible_px};

pub fn render(frame: &mut Frame, area: Rect, workshop: &Workshop, track_rows: u16, theme: &PuppetTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(track_rows + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let cursor = workshop.cursor();
    let under = workshop
        .object_at_cursor()
        .map_or("empty".to_string(), |o| format!("{} ({})", o.kind, o.id));
    let header = Line::from(vec![
        Span::styled(workshop.name().to_string(), theme.title()),
        Span::styled(format!("  {}", workshop.id()), theme.dim()),
        Span::raw(format!(
            "  |  {} objects  |  cell {},{}: {under}",
            workshop.objects().len(),
            cursor.col,
            cursor.row
        )),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let hidden = |_: &GameObject| false;
    let scene = TrackScene {
        title: " Workshop ".to_string(),
        objects: workshop.objects(),
        camera_x: workshop.camera_x(visible_px(chunks[1].width)),
        player: None,
        cursor: Some(cursor),
        hidden: &hidden,
    };
    track::render(frame, chunks[1], &scene, theme);

    render_palette(frame, chunks[2], workshop.palette(), theme);

    if workshop.is_browsing() {
        render_history(frame, chunks[1], workshop, theme);
    }
}

fn render_palette(frame: &mut Frame, area: Rect, selected: ObjectKind, theme: &PuppetTheme) {
    let spans: Vec<Span> = ObjectKind::iter()
        .flat_map(|kind| {
            let (glyph, style) = theme.object(kind);
            let label_style = if kind == selected {
                theme.highlight()
            } else {
                Style::default()
            };
            [
                Span::styled(glyph.to_string(), style),
                Span::styled(format!(" {kind} "), label_style),
                Span::raw(" "),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title("Palette"),
    );
    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, track_area: Rect, workshop: &Workshop, theme: &PuppetTheme) {
    let items: Vec<ListItem> = workshop
        .history()
        .iter()
        .map(|entry| {
            ListItem::new(format!(
                "{} - {} objects  \"{}\"",
                entry.name,
                entry.objects.len(),
                entry.prompt
            ))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary()))
                .title("Import From Synthesis History"),
        )
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");

    let width = track_area.width.saturating_sub(8);
    let area = Rect {
        x: track_area.x + 4,
        y: track_area.y + 1,
        width,
        height: track_area.height.saturating_sub(2),
    };
    let mut state = ListState::default().with_selected(workshop.browsing());
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

//! Play screen: HUD, track, and the end-of-session overlay.

use client_frontend_core::format::session_banner;
use game_core::{GameConfig, GameObject};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use runtime::{ActiveSession, SessionEnd};

use crate::collaborators::TrackRunner;
use crate::presentation::theme::PuppetTheme;
use crate::presentation::widgets::track::{self, TrackScene};

/// Blocks of track kept visible behind the player.
const TRAILING_BLOCKS: f64 = 4.0;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &ActiveSession,
    runner: Option<&TrackRunner>,
    track_rows: u16,
    theme: &PuppetTheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(track_rows + 2), Constraint::Min(0)])
        .split(area);

    render_hud(frame, chunks[0], session, runner, theme);

    let hidden = |object: &GameObject| runner.is_some_and(|r| r.is_collected(&object.id));
    let scene = TrackScene {
        title: format!(" {} ", session.level().name),
        objects: runner.map_or(&session.level().objects[..], TrackRunner::objects),
        camera_x: runner.map_or(0.0, |r| {
            (r.distance() - TRAILING_BLOCKS * GameConfig::BLOCK_SIZE).max(0.0)
        }),
        player: runner.map(|r| (r.distance(), r.player_y())),
        cursor: None,
        hidden: &hidden,
    };
    track::render(frame, chunks[1], &scene, theme);

    if let Some((headline, detail)) = session_banner(session) {
        let color = match session.end() {
            Some(SessionEnd::Won) => theme.primary(),
            _ => Color::LightRed,
        };
        render_overlay(frame, chunks[1], headline, &detail, color);
    }
}

fn render_hud(
    frame: &mut Frame,
    area: Rect,
    session: &ActiveSession,
    runner: Option<&TrackRunner>,
    theme: &PuppetTheme,
) {
    let coins = runner.map_or(session.coins(), TrackRunner::coins);
    let progress = runner.map_or(0.0, TrackRunner::progress);
    let line = Line::from(vec![
        Span::styled(session.id().to_string(), theme.dim()),
        Span::raw("  |  Coins: "),
        Span::styled(
            format!("{coins}/{}", session.level().coin_count()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  |  Progress: "),
        Span::styled(format!("{:.0}%", progress * 100.0), theme.title()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_overlay(frame: &mut Frame, track_area: Rect, headline: &str, detail: &str, color: Color) {
    let width = track_area.width.min(36);
    let height = track_area.height.min(5);
    let area = Rect {
        x: track_area.x + (track_area.width - width) / 2,
        y: track_area.y + (track_area.height - height) / 2,
        width,
        height,
    };

    let text = vec![
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(detail.to_string()),
        Line::from("[Enter] retry  [Esc] levels"),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

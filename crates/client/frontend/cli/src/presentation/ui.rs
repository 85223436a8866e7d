//! UI rendering entry point.
//!
//! Composes the header, the active view's body, the status log, and the
//! key-hint footer. The AI modal is drawn as an overlay on level select.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use runtime::{App, View};

use crate::{
    config::CliConfig,
    input::key_hints,
    presentation::{terminal::Tui, theme::PuppetTheme, widgets},
    state::UiState,
};
use client_frontend_core::MessageLog;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub app: &'a App,
    pub ui: &'a UiState,
    pub messages: &'a MessageLog,
    pub cli_config: &'a CliConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Draw one frame; split from [`render`] so it can target any backend.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = PuppetTheme::from_settings(ctx.app.settings());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // Header
            Constraint::Min(0),                                     // Body
            Constraint::Length(ctx.cli_config.ui.status_panel_height), // Status
            Constraint::Length(1),                                  // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], ctx, &theme);
    render_body(frame, chunks[1], ctx, &theme);
    widgets::status::render_messages(frame, chunks[2], ctx.messages, &theme);
    widgets::status::render_footer(frame, chunks[3], &key_hints(ctx.app, ctx.ui));
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &PuppetTheme) {
    let app = ctx.app;
    let mut spans = vec![
        Span::styled("PUPPET DASH", theme.title()),
        Span::raw("  |  "),
        Span::raw(app.view().to_string()),
        Span::raw(format!("  |  Speed {:.1}", app.settings().speed)),
    ];
    if app.last_coins() > 0 {
        spans.push(Span::raw(format!("  |  Last run {} coins", app.last_coins())));
    }
    if app.generation().is_requesting() {
        spans.push(Span::styled("  |  SYNTHESIZING", theme.title()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
    frame.render_widget(paragraph, area);
}

fn render_body(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &PuppetTheme) {
    let app = ctx.app;
    let track_rows = ctx.cli_config.ui.track_rows;

    match app.view() {
        View::Menu => widgets::menu::render(frame, area, ctx.ui.menu_entry(), theme),
        View::Settings => widgets::settings::render(frame, area, app.settings(), ctx.ui, theme),
        View::LevelSelect => {
            let levels = app.levels();
            widgets::level_select::render(frame, area, &levels, ctx.ui.level_index, theme);
            if app.is_ai_modal_open() {
                widgets::ai_modal::render(frame, centered_rect(70, 60, area), app.generation(), theme);
            }
        }
        View::Play => {
            if let Some(session) = app.play() {
                widgets::play::render(frame, area, session, ctx.ui.runner.as_ref(), track_rows, theme);
            }
        }
        View::Editor => {
            if let Some(workshop) = ctx.ui.workshop.as_ref() {
                widgets::editor::render(frame, area, workshop, track_rows, theme);
            }
        }
    }
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

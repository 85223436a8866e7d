//! Prompt modal for AI level synthesis.
//!
//! Shows the prompt input while idle, the rolling progress log while a
//! request is in flight, and the error with its two exits on failure.

use runtime::{GenerationPhase, GenerationWorkflow};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::PuppetTheme;

pub fn render(frame: &mut Frame, area: Rect, workflow: &GenerationWorkflow, theme: &PuppetTheme) {
    let lines = match workflow.phase() {
        GenerationPhase::Idle | GenerationPhase::Success { .. } => prompt_lines(workflow, theme),
        GenerationPhase::Requesting { .. } => progress_lines(workflow, theme),
        GenerationPhase::Error { message } => error_lines(message),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary()))
            .title(Span::styled("AI Level Synthesis", theme.title())),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn prompt_lines(workflow: &GenerationWorkflow, theme: &PuppetTheme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Describe the level to weave:", theme.dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme.title()),
            Span::raw(workflow.prompt().to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(Span::styled(
            "Try: \"crystal caverns with floating coins\"",
            theme.dim(),
        )),
    ]
}

fn progress_lines(workflow: &GenerationWorkflow, theme: &PuppetTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Synthesizing \"{}\"", workflow.prompt()),
            theme.title(),
        )),
        Line::from(""),
    ];
    let count = workflow.progress().len();
    lines.extend(workflow.progress().entries().enumerate().map(|(index, entry)| {
        let style = if index + 1 == count {
            Style::default().fg(theme.secondary())
        } else {
            theme.dim()
        };
        Line::from(Span::styled(format!("  {entry}"), style))
    }));
    lines
}

fn error_lines(message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "SYNTHESIS FAILED",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("[Enter] retry    [Esc] return to base"),
    ]
}

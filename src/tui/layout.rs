use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::TuiApp;

const MAX_PANEL_WIDTH: u16 = 100;
const WAITING: &str = "Waiting for stories...";

pub fn render(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig, hint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Story panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_story_panel(frame, app, centered(chunks[0]), colors);
    render_status_bar(frame, app, chunks[1], colors, hint);
}

/// Horizontally centered area, at most `MAX_PANEL_WIDTH` wide.
fn centered(area: Rect) -> Rect {
    let width = area.width.min(MAX_PANEL_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_story_panel(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let block = Block::default()
        .title(" Feedwheel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let Some(story) = &app.story else {
        let waiting = Paragraph::new(WAITING)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.meta));
        frame.render_widget(waiting, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title, meta, rule
            Constraint::Min(1),    // Summary
        ])
        .split(inner);

    let header = Text::from(vec![
        Line::from(Span::styled(
            story.title.as_str(),
            Style::default()
                .fg(colors.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            story.meta_line(),
            Style::default().fg(colors.meta),
        )),
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(colors.border),
        )),
    ]);
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    let summary = Paragraph::new(story.summary.as_str())
        .style(Style::default().fg(colors.body))
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));
    frame.render_widget(summary, chunks[1]);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig, hint: &str) {
    let (text, fg) = match &app.status {
        Some((message, severity)) => (message.as_str(), colors.status_color(*severity)),
        None => (hint, colors.status_fg),
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

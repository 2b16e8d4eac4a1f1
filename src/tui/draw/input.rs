//! Input bar and the status/hint line below it.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::ACCENT;

const HINTS: &str =
    "Enter send · Alt+K keyboard · Alt+L language · Alt+S settings · Ctrl+Y copy · Ctrl+C quit";

pub(super) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" Message ", Style::default().fg(ACCENT)));
    let inner = block.inner(area);
    let inner_width = inner.width.saturating_sub(1) as usize;

    // Keep the cursor visible: show the tail of the input when it overflows.
    let cursor_col = app.input[..app.input_cursor].chars().count();
    let skip = cursor_col.saturating_sub(inner_width);
    let visible: String = app.input.chars().skip(skip).collect();

    let paragraph = if app.input.is_empty() {
        Paragraph::new(Span::styled(
            "Type a message…",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(visible)
    };
    f.render_widget(paragraph.block(block), area);
    f.set_cursor_position(Position::new(
        inner.x + (cursor_col - skip) as u16,
        inner.y,
    ));
}

/// Status line: transient status if set, otherwise key hints.
pub(super) fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Gray),
        )),
        None => Line::from(Span::styled(HINTS, Style::default().fg(Color::DarkGray))),
    };
    f.render_widget(Paragraph::new(line), area);
}

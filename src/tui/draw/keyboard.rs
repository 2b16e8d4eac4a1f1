//! Virtual Assamese keyboard panel: tab row plus a key grid.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::keyboard::KeyboardTab;

use super::super::app::App;
use super::super::constants::{ACCENT, KEYBOARD_COLUMNS};

pub(super) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(panel) = &app.keyboard else {
        return;
    };

    let mut lines: Vec<Line<'static>> = Vec::new();

    // Tab row: the active group highlighted.
    let mut tab_spans: Vec<Span<'static>> = Vec::new();
    for tab in KeyboardTab::ALL {
        let style = if tab == panel.tab {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(format!(" {} ", tab.title()), style));
    }
    lines.push(Line::from(tab_spans));

    // Key grid, the selected key reversed.
    let keys = panel.tab.keys();
    for (row_idx, row) in keys.chunks(KEYBOARD_COLUMNS).enumerate() {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (col_idx, key) in row.iter().enumerate() {
            let idx = row_idx * KEYBOARD_COLUMNS + col_idx;
            let style = if idx == panel.selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {} ", key), style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        "Tab group · arrows move · Enter insert · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " অসমীয়া keyboard ",
            Style::default().fg(ACCENT),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

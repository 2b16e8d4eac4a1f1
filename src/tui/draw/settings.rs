//! Settings popup: API key entry, reply language, sentiment badge toggle.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::core::settings::Language;

use super::super::app::{App, SettingsField};
use super::super::constants::ACCENT;

/// Centered popup rect of the given size, clamped to the frame.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub(super) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(popup) = &app.settings_popup else {
        return;
    };
    let rect = centered_rect(62, 9, area);
    f.render_widget(Clear, rect);

    // The key itself is never echoed back; only the edit in progress.
    let key_display = if popup.api_key_input.is_empty() {
        "(unchanged — type to replace)".to_string()
    } else {
        "•".repeat(popup.api_key_input.chars().count())
    };
    let language = match popup.draft.language {
        Language::English => "English",
        Language::Assamese => "অসমীয়া (Assamese)",
    };
    let sentiment = if popup.draft.show_sentiment {
        "shown"
    } else {
        "hidden"
    };

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                " Gemini API key  ",
                field_style(popup.focused == SettingsField::ApiKey),
            ),
            Span::styled(key_display, Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(
                " Reply language  ",
                field_style(popup.focused == SettingsField::Language),
            ),
            Span::raw(language),
        ]),
        Line::from(vec![
            Span::styled(
                " Sentiment badge ",
                field_style(popup.focused == SettingsField::ShowSentiment),
            ),
            Span::raw(sentiment),
        ]),
        Line::default(),
        Line::from(Span::styled(
            " ↑/↓ move · Enter/Space toggle · Del clear key · Esc save & close",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " The key is stored locally and never leaves this machine.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(" Settings ", Style::default().fg(ACCENT)));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

//! Header line: app name, model, and active reply language.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;
use crate::core::settings::Language;

use super::super::app::App;
use super::super::constants::ACCENT;

pub(super) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let language = match app.settings.language {
        Language::English => "English",
        Language::Assamese => "অসমীয়া",
    };
    let line = Line::from(vec![
        Span::styled(
            format!("◆ {}", app::NAME),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.model_id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  ⟨{}⟩", language),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

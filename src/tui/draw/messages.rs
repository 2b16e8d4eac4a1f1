//! Message list: markup-aware rendering with sentiment badges and code blocks.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::markup::{self, MessagePart, SegmentKind};
use crate::core::message::{Message, Role};
use crate::core::response::Sentiment;
use crate::core::settings::Language;

use super::super::app::{App, ScrollPosition};
use super::super::constants::{
    ACCENT, ACCENT_SECONDARY, SENTIMENT_NEGATIVE, SENTIMENT_NEUTRAL, SENTIMENT_POSITIVE, SPINNER,
};
use super::super::text::{wrap_message, wrap_segments};

fn sentiment_color(s: Sentiment) -> Color {
    match s {
        Sentiment::Positive => SENTIMENT_POSITIVE,
        Sentiment::Negative => SENTIMENT_NEGATIVE,
        Sentiment::Neutral => SENTIMENT_NEUTRAL,
    }
}

fn sentiment_label(s: Sentiment, language: Language) -> &'static str {
    match (language, s) {
        (Language::English, Sentiment::Positive) => "Positive",
        (Language::English, Sentiment::Negative) => "Negative",
        (Language::English, Sentiment::Neutral) => "Neutral",
        (Language::Assamese, Sentiment::Positive) => "ইতিবাচক",
        (Language::Assamese, Sentiment::Negative) => "নেতিবাচক",
        (Language::Assamese, Sentiment::Neutral) => "নিৰপেক্ষ",
    }
}

fn segment_style(kind: SegmentKind) -> Style {
    match kind {
        SegmentKind::Normal => Style::default(),
        SegmentKind::Bold => Style::default().add_modifier(Modifier::BOLD),
        SegmentKind::Italic => Style::default().add_modifier(Modifier::ITALIC),
    }
}

/// Label line: "You · 14:32" or "Assistant · 14:32 · Positive".
fn label_line(msg: &Message, language: Language, show_sentiment: bool) -> Line<'static> {
    let (who, who_style) = match msg.role {
        Role::User => ("You", Style::default().fg(Color::DarkGray)),
        Role::Assistant => (
            "Assistant",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    };
    let mut spans = vec![
        Span::styled(who.to_string(), who_style),
        Span::styled(
            format!(" · {}", msg.timestamp.with_timezone(&Local).format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if show_sentiment && let Some(sentiment) = msg.sentiment {
        spans.push(Span::styled(
            format!(" · {}", sentiment_label(sentiment, language)),
            Style::default().fg(sentiment_color(sentiment)),
        ));
    }
    Line::from(spans)
}

/// Append the rendered lines of one message: label, markup-parsed content,
/// separator.
fn add_message_lines(lines: &mut Vec<Line<'static>>, msg: &Message, app: &App, width: usize) {
    lines.push(label_line(
        msg,
        app.settings.language,
        app.settings.show_sentiment,
    ));
    let code_style = Style::default().fg(ACCENT_SECONDARY);
    for part in markup::parse_message(&msg.content) {
        match part {
            MessagePart::Text(segments) => {
                for styled in wrap_segments(&segments, width) {
                    let spans: Vec<Span<'static>> = styled
                        .into_iter()
                        .map(|(kind, text)| Span::styled(text, segment_style(kind)))
                        .collect();
                    lines.push(Line::from(spans));
                }
            }
            MessagePart::Code { lang, code } => {
                let title = if lang.is_empty() {
                    "╭─ code".to_string()
                } else {
                    format!("╭─ {}", lang)
                };
                lines.push(Line::from(Span::styled(title, code_style)));
                for code_line in wrap_message(code, width.saturating_sub(2)) {
                    lines.push(Line::from(vec![
                        Span::styled("│ ".to_string(), code_style),
                        Span::styled(code_line, code_style),
                    ]));
                }
                lines.push(Line::from(Span::styled("╰─".to_string(), code_style)));
            }
        }
    }
    lines.push(Line::default());
}

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let width = area.width.saturating_sub(1) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in &app.messages {
        add_message_lines(&mut lines, msg, app, width.max(1));
    }
    if let Some(since) = app.thinking_since {
        let frame = (since.elapsed().as_millis() / 120) as usize % SPINNER.len();
        lines.push(Line::from(Span::styled(
            format!("{} thinking…", SPINNER[frame]),
            Style::default().fg(ACCENT),
        )));
    }

    let viewport = area.height as usize;
    let max_scroll = lines.len().saturating_sub(viewport);
    app.last_max_scroll = max_scroll;
    let offset = match app.scroll {
        ScrollPosition::Bottom => max_scroll,
        ScrollPosition::Line(n) => n.min(max_scroll),
    };

    f.render_widget(
        Paragraph::new(ratatui::text::Text::from(lines)).scroll((offset as u16, 0)),
        area,
    );
}

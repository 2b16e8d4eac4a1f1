//! Rendering: layout of header, message list, keyboard panel, input, and popups.

mod header;
mod input;
mod keyboard;
mod messages;
mod settings;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::App;
use super::constants::KEYBOARD_PANEL_HEIGHT;

/// Draw the whole frame.
pub(crate) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let keyboard_height = if app.keyboard.is_some() {
        KEYBOARD_PANEL_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // header
            Constraint::Min(3),                  // messages
            Constraint::Length(keyboard_height), // keyboard panel
            Constraint::Length(3),               // input
            Constraint::Length(1),               // status / hints
        ])
        .split(area);

    header::draw(f, app, chunks[0]);
    messages::draw(f, app, chunks[1]);
    if app.keyboard.is_some() {
        keyboard::draw(f, app, chunks[2]);
    }
    input::draw(f, app, chunks[3]);
    input::draw_status(f, app, chunks[4]);

    if app.settings_popup.is_some() {
        settings::draw(f, app, area);
    }
}

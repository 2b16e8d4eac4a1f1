//! Handler for the virtual Assamese keyboard panel.

use crossterm::event::{KeyCode, KeyEvent};

use super::super::app::App;
use super::super::constants::KEYBOARD_COLUMNS;

/// Handle keyboard-panel navigation. Returns true when the key was
/// consumed; anything else (typing, Backspace) falls through to the main
/// input so Latin text can be mixed in without closing the panel.
pub(crate) fn handle(key: KeyEvent, app: &mut App) -> bool {
    let Some(panel) = app.keyboard.as_mut() else {
        return false;
    };
    let key_count = panel.tab.keys().len();
    match key.code {
        KeyCode::Tab => {
            panel.next_tab();
            true
        }
        KeyCode::Left => {
            panel.selected = panel.selected.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            panel.selected = (panel.selected + 1).min(key_count - 1);
            true
        }
        KeyCode::Up => {
            panel.selected = panel.selected.saturating_sub(KEYBOARD_COLUMNS);
            true
        }
        KeyCode::Down => {
            panel.selected = (panel.selected + KEYBOARD_COLUMNS).min(key_count - 1);
            true
        }
        KeyCode::Enter => {
            let glyph = panel.tab.keys()[panel.selected];
            app.insert_str(glyph);
            true
        }
        _ => false,
    }
}

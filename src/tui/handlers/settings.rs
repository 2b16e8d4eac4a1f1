//! Handler for the settings popup.

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{api_key, settings};

use super::super::app::{App, SettingsField};
use crate::core::store::FileStore;

/// Commit the popup draft: persist settings, store a pasted API key.
fn commit(app: &mut App, store: &FileStore) {
    let Some(popup) = app.settings_popup.take() else {
        return;
    };
    app.settings = popup.draft;
    if let Err(e) = settings::save(store, &app.settings) {
        app.status = Some(format!("Failed to save settings: {}", e));
        return;
    }
    let key = popup.api_key_input.trim();
    if !key.is_empty() {
        match api_key::store_api_key(key) {
            Ok(()) => {
                app.status = Some("Settings and API key saved (key used on next start)".to_string())
            }
            Err(e) => app.status = Some(format!("Failed to store API key: {}", e)),
        }
    } else {
        app.status = Some("Settings saved".to_string());
    }
}

/// Handle keys while the settings popup is open. Esc commits and closes.
pub(crate) fn handle(key: KeyEvent, app: &mut App, store: &FileStore) {
    let Some(popup) = app.settings_popup.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => commit(app, store),
        KeyCode::Down | KeyCode::Tab => popup.focused = popup.focused.next(),
        KeyCode::Up | KeyCode::BackTab => popup.focused = popup.focused.prev(),
        KeyCode::Enter | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if popup.focused != SettingsField::ApiKey =>
        {
            match popup.focused {
                SettingsField::Language => popup.draft.language = popup.draft.language.toggled(),
                SettingsField::ShowSentiment => {
                    popup.draft.show_sentiment = !popup.draft.show_sentiment
                }
                SettingsField::ApiKey => {}
            }
        }
        KeyCode::Enter => popup.focused = popup.focused.next(),
        KeyCode::Backspace if popup.focused == SettingsField::ApiKey => {
            popup.api_key_input.pop();
        }
        KeyCode::Delete if popup.focused == SettingsField::ApiKey => {
            popup.api_key_input.clear();
            if let Err(e) = api_key::remove_api_key() {
                log::warn!("Failed to remove stored API key: {}", e);
            }
        }
        KeyCode::Char(c) if popup.focused == SettingsField::ApiKey => {
            popup.api_key_input.push(c);
        }
        _ => {}
    }
}

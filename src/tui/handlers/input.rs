//! Handler for the main chat input (typing, sending, scrolling).

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::history;
use crate::core::message::Message;

use super::super::constants;
use super::{HandleKeyContext, HandleResult, chat_spawn};

/// Handle main input keys (no popup open; keyboard panel keys already consumed).
pub(crate) fn handle_main_input(key: KeyEvent, ctx: HandleKeyContext) -> HandleResult {
    let app = ctx.app;
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            if ctx.pending_chat.is_none()
                && let Some(text) = app.take_input()
            {
                app.push_message(Message::user(text.as_str()));
                if let Err(e) = history::save(ctx.store.as_ref(), &app.messages) {
                    log::warn!("Failed to save history: {}", e);
                }
                app.status = None;
                app.thinking_since = Some(Instant::now());
                *ctx.pending_chat = Some(chat_spawn::spawn_chat(
                    ctx.rt,
                    Arc::clone(ctx.config),
                    text,
                    app.settings.language,
                ));
            }
            HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            app.backspace();
            HandleResult::Continue
        }
        (KeyCode::Left, _) => {
            app.cursor_left();
            HandleResult::Continue
        }
        (KeyCode::Right, _) => {
            app.cursor_right();
            HandleResult::Continue
        }
        (KeyCode::Home, _) => {
            app.input_cursor = 0;
            HandleResult::Continue
        }
        (KeyCode::End, _) => {
            app.input_cursor = app.input.len();
            HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ignore Alt+key: user likely intended a shortcut
            if !mods.contains(KeyModifiers::ALT) {
                app.insert_char(c);
            }
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

//! Event handlers for the TUI keyboard input.

mod chat_spawn;
mod input;
mod keyboard;
mod settings;

use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm::ChatError;
use crate::core::response::ChatReply;
use crate::core::settings as settings_core;
use crate::core::store::FileStore;

use super::app::{App, KeyboardPanel, SettingsPopup};

/// Holds the receiver and cancellation token for a request in flight.
pub struct PendingChat {
    pub result_rx: mpsc::Receiver<Result<ChatReply, ChatError>>,
    /// Token to cancel the in-flight request (Esc).
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Everything a key handler may touch.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub config: &'a Arc<Config>,
    pub store: &'a Arc<FileStore>,
    pub pending_chat: &'a mut Option<PendingChat>,
    pub rt: &'a Arc<Runtime>,
}

/// Copy the most recent assistant reply to the system clipboard.
fn copy_last_reply(app: &mut App) {
    let Some(content) = app.last_assistant().map(|m| m.content.clone()) else {
        app.status = Some("Nothing to copy yet".to_string());
        return;
    };
    match arboard::Clipboard::new().and_then(|mut c| c.set_text(content)) {
        Ok(()) => app.status = Some("Reply copied to clipboard".to_string()),
        Err(e) => app.status = Some(format!("Copy failed: {}", e)),
    }
}

/// Handle a key event. Settings popup owns all input while open; the
/// keyboard panel owns Tab, arrows, and Enter while open.
pub fn handle_key(key: KeyEvent, ctx: HandleKeyContext) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if ctx.app.settings_popup.is_some() {
        settings::handle(key, ctx.app, ctx.store);
        return HandleResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return HandleResult::Break,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            copy_last_reply(ctx.app);
            return HandleResult::Continue;
        }
        (KeyCode::Char('k'), KeyModifiers::ALT) => {
            ctx.app.keyboard = match ctx.app.keyboard {
                Some(_) => None,
                None => Some(KeyboardPanel::new()),
            };
            return HandleResult::Continue;
        }
        (KeyCode::Char('s'), KeyModifiers::ALT) => {
            ctx.app.settings_popup = Some(SettingsPopup {
                focused: super::app::SettingsField::ApiKey,
                api_key_input: String::new(),
                draft: ctx.app.settings,
            });
            return HandleResult::Continue;
        }
        (KeyCode::Char('l'), KeyModifiers::ALT) => {
            ctx.app.settings.language = ctx.app.settings.language.toggled();
            if let Err(e) = settings_core::save(ctx.store.as_ref(), &ctx.app.settings) {
                log::warn!("Failed to save settings: {}", e);
            }
            ctx.app.status = Some(format!(
                "Replies now in {}",
                match ctx.app.settings.language {
                    settings_core::Language::English => "English",
                    settings_core::Language::Assamese => "Assamese",
                }
            ));
            return HandleResult::Continue;
        }
        (KeyCode::Esc, _) => {
            if let Some(chat) = ctx.pending_chat {
                chat.cancel_token.cancel();
                ctx.app.status = Some("Cancelling…".to_string());
            } else if ctx.app.keyboard.is_some() {
                ctx.app.keyboard = None;
            } else {
                ctx.app.status = None;
            }
            return HandleResult::Continue;
        }
        _ => {}
    }

    if ctx.app.keyboard.is_some() && keyboard::handle(key, ctx.app) {
        return HandleResult::Continue;
    }

    input::handle_main_input(key, ctx)
}

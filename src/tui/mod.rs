//! TUI: interactive bilingual chat with virtual keyboard and settings panel.

mod app;
mod constants;
mod draw;
mod handlers;
mod text;

pub use app::App;

use std::io;
use std::sync::Arc;

use crossterm::event::{self, Event};
use crossterm::execute;
use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::history;
use crate::core::llm::ChatError;
use crate::core::message::Message;
use crate::core::response::Sentiment;
use crate::core::settings::{self, Language};
use crate::core::store::FileStore;

use handlers::{HandleKeyContext, HandleResult, PendingChat};

use draw::draw;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// In-chat assistant message for a failed request, in the reply language.
/// Auth failures surface their actionable message as-is.
fn error_reply(language: Language, err: &ChatError) -> Message {
    log::error!("Chat request failed: {}", err);
    let content = match err {
        ChatError::ApiAuth(msg) => msg.clone(),
        _ => match language {
            Language::English => "Sorry, I encountered an error. Please try again.".to_string(),
            Language::Assamese => {
                "দুঃখিত, মই এটা ত্ৰুটি পালোঁ। অনুগ্ৰহ কৰি পুনৰ চেষ্টা কৰক।".to_string()
            }
        },
    };
    Message::assistant(content, Some(Sentiment::Negative))
}

fn save_if_dirty(app: &mut App, store: &FileStore) {
    if app.dirty {
        if let Err(e) = history::save(store, &app.messages) {
            log::warn!("Failed to save history: {}", e);
        } else {
            app.dirty = false;
        }
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for the chat calls.
pub fn run(config: Arc<Config>, language_override: Option<Language>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let store = Arc::new(
        FileStore::open().ok_or_else(|| io::Error::other("No data directory available"))?,
    );
    let mut user_settings = settings::load(store.as_ref());
    if let Some(language) = language_override {
        user_settings.language = language;
    }
    let messages = history::load(store.as_ref());
    let mut app = App::new(config.model_id.clone(), user_settings, messages);
    let mut pending_chat: Option<PendingChat> = None;

    loop {
        if let Some(chat) = &pending_chat
            && let Ok(result) = chat.result_rx.try_recv()
        {
            app.thinking_since = None;
            match result {
                Ok(reply) => {
                    app.push_message(Message::assistant(reply.content, Some(reply.sentiment)));
                }
                Err(ChatError::Cancelled) => {
                    app.status = Some("Request cancelled".to_string());
                }
                Err(e) => {
                    let language = app.settings.language;
                    app.push_message(error_reply(language, &e));
                }
            }
            save_if_dirty(&mut app, store.as_ref());
            pending_chat = None;
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? && let Event::Key(key) = event::read()?
        {
            let result = handlers::handle_key(
                key,
                HandleKeyContext {
                    app: &mut app,
                    config: &config,
                    store: &store,
                    pending_chat: &mut pending_chat,
                    rt: &rt,
                },
            );
            if result == HandleResult::Break {
                save_if_dirty(&mut app, store.as_ref());
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

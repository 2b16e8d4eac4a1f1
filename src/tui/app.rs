//! TUI application state: transcript, input, panels, scroll.

use std::time::Instant;

use crate::core::keyboard::KeyboardTab;
use crate::core::message::Message;
use crate::core::settings::Settings;

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

/// State of the virtual Assamese keyboard panel.
pub struct KeyboardPanel {
    pub tab: KeyboardTab,
    /// Index of the highlighted key within the current tab.
    pub selected: usize,
}

impl KeyboardPanel {
    pub fn new() -> Self {
        Self {
            tab: KeyboardTab::Vowels,
            selected: 0,
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.selected = 0;
    }
}

/// Field focused in the settings popup.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ApiKey,
    Language,
    ShowSentiment,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::ApiKey => SettingsField::Language,
            SettingsField::Language => SettingsField::ShowSentiment,
            SettingsField::ShowSentiment => SettingsField::ApiKey,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}

/// State of the settings popup. Edits apply to a draft; closing the popup
/// commits it.
pub struct SettingsPopup {
    pub focused: SettingsField,
    pub api_key_input: String,
    pub draft: Settings,
}

pub struct App {
    pub messages: Vec<Message>,
    /// User input in the text field.
    pub input: String,
    /// Cursor position in the input (byte index; always on a char boundary).
    pub input_cursor: usize,
    pub settings: Settings,
    /// Model ID displayed in the header.
    pub model_id: String,
    pub scroll: ScrollPosition,
    /// Max scroll offset from the last draw; bounds scroll_down.
    pub last_max_scroll: usize,
    /// When set, the keyboard panel is visible and owns Tab/arrows/Enter.
    pub keyboard: Option<KeyboardPanel>,
    /// When set, the settings popup is visible and owns all input.
    pub settings_popup: Option<SettingsPopup>,
    /// A request is in flight; drives the spinner.
    pub thinking_since: Option<Instant>,
    /// Transient status line (copy confirmation, cancellation, errors).
    pub status: Option<String>,
    /// Transcript changed since the last save.
    pub dirty: bool,
}

impl App {
    pub fn new(model_id: String, settings: Settings, messages: Vec<Message>) -> Self {
        Self {
            messages,
            input: String::new(),
            input_cursor: 0,
            settings,
            model_id,
            scroll: ScrollPosition::Bottom,
            last_max_scroll: 0,
            keyboard: None,
            settings_popup: None,
            thinking_since: None,
            status: None,
            dirty: false,
        }
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll = ScrollPosition::Bottom;
        self.dirty = true;
    }

    /// Most recent assistant message, if any.
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::core::message::Role::Assistant)
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking_since.is_some()
    }

    // --- input editing (cursor is a byte index on a char boundary) ---

    pub fn insert_str(&mut self, s: &str) {
        self.input.insert_str(self.input_cursor, s);
        self.input_cursor += s.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.input_cursor].chars().next_back() {
            let start = self.input_cursor - prev.len_utf8();
            self.input.remove(start);
            self.input_cursor = start;
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.input[..self.input_cursor].chars().next_back() {
            self.input_cursor -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.input[self.input_cursor..].chars().next() {
            self.input_cursor += next.len_utf8();
        }
    }

    /// Take the trimmed input and reset the field. Returns None when blank.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input.trim().to_string();
        self.input.clear();
        self.input_cursor = 0;
        if text.is_empty() { None } else { Some(text) }
    }

    // --- scrolling ---

    pub fn scroll_up(&mut self, lines: usize) {
        let current = match self.scroll {
            ScrollPosition::Line(n) => n,
            ScrollPosition::Bottom => self.last_max_scroll,
        };
        self.scroll = ScrollPosition::Line(current.saturating_sub(lines));
    }

    pub fn scroll_down(&mut self, lines: usize) {
        if let ScrollPosition::Line(n) = self.scroll {
            let next = n + lines;
            self.scroll = if next >= self.last_max_scroll {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::Line(next)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new("gemini-2.0-flash".to_string(), Settings::default(), vec![])
    }

    #[test]
    fn insert_and_backspace_handle_multibyte() {
        let mut a = app();
        a.insert_str("ক্ষ");
        a.insert_char('!');
        assert_eq!(a.input, "ক্ষ!");
        a.backspace();
        assert_eq!(a.input, "ক্ষ");
        a.backspace();
        // "ক্ষ" is three scalar values; one backspace removes the last.
        assert_eq!(a.input, "ক্");
    }

    #[test]
    fn cursor_moves_by_full_chars() {
        let mut a = app();
        a.insert_str("অসম");
        a.cursor_left();
        a.cursor_left();
        a.insert_char('x');
        assert_eq!(a.input, "অxসম");
        a.cursor_right();
        a.cursor_right();
        assert_eq!(a.input_cursor, a.input.len());
    }

    #[test]
    fn take_input_trims_and_resets() {
        let mut a = app();
        a.insert_str("  hello  ");
        assert_eq!(a.take_input().as_deref(), Some("hello"));
        assert!(a.input.is_empty());
        assert_eq!(a.input_cursor, 0);
        assert!(a.take_input().is_none());
    }

    #[test]
    fn scroll_clamps_to_bottom() {
        let mut a = app();
        a.last_max_scroll = 10;
        a.scroll_up(4);
        assert_eq!(a.scroll, ScrollPosition::Line(6));
        a.scroll_down(100);
        assert_eq!(a.scroll, ScrollPosition::Bottom);
    }
}

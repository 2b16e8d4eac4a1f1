//! TUI constants: colors, timing, layout.

use ratatui::style::Color;

/// Accent color, warm saffron (#FF9933).
pub(super) const ACCENT: Color = Color::Rgb(255, 153, 51);

/// Secondary accent, soft blue (#7EC8E3) for code and metadata.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Sentiment badge colors: positive green, negative red, neutral blue.
pub(super) const SENTIMENT_POSITIVE: Color = Color::Rgb(80, 200, 120);
pub(super) const SENTIMENT_NEGATIVE: Color = Color::Rgb(220, 80, 80);
pub(super) const SENTIMENT_NEUTRAL: Color = Color::Rgb(100, 150, 230);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Keys per row in the keyboard panel grid.
pub(crate) const KEYBOARD_COLUMNS: usize = 12;

/// Rows of keys visible in the keyboard panel (plus tabs and hint line).
pub(crate) const KEYBOARD_PANEL_HEIGHT: u16 = 8;

/// Spinner frames for the "thinking" animation.
pub(super) const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

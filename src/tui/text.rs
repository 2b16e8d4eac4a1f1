//! Display-line wrapping for the chat history.
//!
//! Code blocks wrap as plain text through textwrap; inline-parsed text needs
//! style-preserving wrapping so a bold span can continue across a line break.

use crate::core::markup::{SegmentKind, TextSegment};

/// One display line: styled chunks in order. Adjacent chunks always differ
/// in kind.
pub(crate) type StyledLine = Vec<(SegmentKind, String)>;

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message into display lines respecting message newlines, then wrap to `width`.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            for chunk in wrap_text(line, width) {
                out.push(chunk);
            }
        }
    }
    out
}

/// Runs of whitespace and non-whitespace, in order.
fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_ws: Option<bool> = None;
    for (i, c) in s.char_indices() {
        let ws = c.is_whitespace();
        if let Some(p) = prev_ws
            && p != ws
        {
            tokens.push(&s[start..i]);
            start = i;
        }
        prev_ws = Some(ws);
    }
    if start < s.len() {
        tokens.push(&s[start..]);
    }
    tokens
}

fn push_chunk(line: &mut StyledLine, kind: SegmentKind, text: String) {
    if let Some((last_kind, last_text)) = line.last_mut()
        && *last_kind == kind
    {
        last_text.push_str(&text);
    } else {
        line.push((kind, text));
    }
}

/// Split a segment stream into logical lines at embedded newlines, keeping
/// each piece's kind.
fn split_logical_lines(segments: &[TextSegment<'_>]) -> Vec<StyledLine> {
    let mut lines: Vec<StyledLine> = vec![Vec::new()];
    for seg in segments {
        let mut first = true;
        for piece in seg.text.split('\n') {
            if !first {
                lines.push(Vec::new());
            }
            if !piece.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.push((seg.kind, piece.to_string()));
            }
            first = false;
        }
    }
    lines
}

/// Greedy word wrap of one logical line. Width is counted in chars; a word
/// longer than the width is hard-split. Whitespace at a wrap point is
/// dropped, as textwrap does for plain text.
fn wrap_logical_line(chunks: &[(SegmentKind, String)], width: usize) -> Vec<StyledLine> {
    if width == 0 {
        return vec![chunks.to_vec()];
    }
    let mut out: Vec<StyledLine> = Vec::new();
    let mut current: StyledLine = Vec::new();
    let mut col = 0usize;
    for (kind, text) in chunks {
        for token in tokenize(text) {
            let is_ws = token.chars().all(char::is_whitespace);
            let len = token.chars().count();
            if col > 0 && col + len > width {
                out.push(std::mem::take(&mut current));
                col = 0;
                if is_ws {
                    continue;
                }
            }
            if is_ws && col == 0 && !out.is_empty() {
                continue;
            }
            let mut token = token.to_string();
            while col + token.chars().count() > width {
                let take = width - col;
                let split_at = token
                    .char_indices()
                    .nth(take)
                    .map(|(i, _)| i)
                    .unwrap_or(token.len());
                push_chunk(&mut current, *kind, token[..split_at].to_string());
                out.push(std::mem::take(&mut current));
                col = 0;
                token = token[split_at..].to_string();
            }
            if !token.is_empty() {
                col += token.chars().count();
                push_chunk(&mut current, *kind, token);
            }
        }
    }
    out.push(current);
    out
}

/// Wrap inline-parsed segments into display lines of at most `width` chars,
/// preserving bold/italic classification across wraps.
pub(crate) fn wrap_segments(segments: &[TextSegment<'_>], width: usize) -> Vec<StyledLine> {
    let mut out = Vec::new();
    for logical in split_logical_lines(segments) {
        if logical.is_empty() {
            out.push(Vec::new());
        } else {
            out.extend(wrap_logical_line(&logical, width));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::markup::parse_inline;

    fn flat(line: &StyledLine) -> String {
        line.iter().map(|(_, t)| t.as_str()).collect()
    }

    #[test]
    fn wrap_message_preserves_newlines() {
        let lines = wrap_message("line1\nline2", 100);
        assert_eq!(lines, ["line1", "line2"]);
    }

    #[test]
    fn wrap_message_wraps_long_line() {
        let lines = wrap_message("hello world test", 8);
        assert_eq!(lines, ["hello", "world", "test"]);
    }

    #[test]
    fn wrap_message_empty_lines() {
        let lines = wrap_message("a\n\nb", 100);
        assert_eq!(lines, ["a", "", "b"]);
    }

    #[test]
    fn wrap_segments_plain_fits_one_line() {
        let segs = parse_inline("short text");
        let lines = wrap_segments(&segs, 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(flat(&lines[0]), "short text");
    }

    #[test]
    fn wrap_segments_keeps_emphasis_kind() {
        let segs = parse_inline("plain **bold** _italic_");
        let lines = wrap_segments(&segs, 40);
        assert_eq!(lines.len(), 1);
        let kinds: Vec<SegmentKind> = lines[0].iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Normal,
                SegmentKind::Bold,
                SegmentKind::Normal,
                SegmentKind::Italic
            ]
        );
    }

    #[test]
    fn wrap_segments_wraps_at_word_boundary() {
        let segs = parse_inline("aaa bbb ccc");
        let lines = wrap_segments(&segs, 7);
        assert_eq!(lines.len(), 2);
        assert_eq!(flat(&lines[0]), "aaa bbb");
        assert_eq!(flat(&lines[1]), "ccc");
    }

    #[test]
    fn wrap_segments_bold_survives_wrap() {
        let segs = parse_inline("xx **aaa bbb**");
        let lines = wrap_segments(&segs, 6);
        assert!(lines.len() >= 2);
        // The wrapped continuation keeps the bold classification.
        assert!(
            lines[1..]
                .iter()
                .flatten()
                .any(|(k, t)| *k == SegmentKind::Bold && t.contains("bbb"))
        );
    }

    #[test]
    fn wrap_segments_hard_splits_overlong_word() {
        let segs = parse_inline("abcdefghij");
        let lines = wrap_segments(&segs, 4);
        assert_eq!(lines.len(), 3);
        assert_eq!(flat(&lines[0]), "abcd");
        assert_eq!(flat(&lines[1]), "efgh");
        assert_eq!(flat(&lines[2]), "ij");
    }

    #[test]
    fn wrap_segments_respects_embedded_newlines() {
        let segs = parse_inline("one\n\ntwo");
        let lines = wrap_segments(&segs, 40);
        assert_eq!(lines.len(), 3);
        assert_eq!(flat(&lines[0]), "one");
        assert!(lines[1].is_empty());
        assert_eq!(flat(&lines[2]), "two");
    }
}

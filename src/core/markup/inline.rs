//! Inline emphasis pass: `**bold**` and `_italic_` spans.

use super::{SegmentKind, TextSegment};

/// A matched emphasis pair within a string: byte offsets of the opening
/// marker, the enclosed content, and the end of the closing marker.
struct EmphasisMatch {
    start: usize,
    inner_start: usize,
    inner_end: usize,
    end: usize,
}

/// Find the next `**bold**` pair. The enclosed content must be non-empty
/// and free of asterisks; an opening marker without a valid closing pair
/// is skipped and the scan resumes one byte later.
fn find_bold(s: &str) -> Option<EmphasisMatch> {
    let mut from = 0;
    while let Some(open) = s[from..].find("**").map(|i| i + from) {
        let inner_start = open + 2;
        if let Some(close) = s[inner_start..].find("**").map(|i| i + inner_start)
            && close > inner_start
            && !s[inner_start..close].contains('*')
        {
            return Some(EmphasisMatch {
                start: open,
                inner_start,
                inner_end: close,
                end: close + 2,
            });
        }
        from = open + 1;
    }
    None
}

/// Find the next `_italic_` pair. The enclosed content must be non-empty
/// and free of underscores, so the closing marker is the very next
/// underscore; `__` is skipped as an empty pair.
fn find_italic(s: &str) -> Option<EmphasisMatch> {
    let mut from = 0;
    while let Some(open) = s[from..].find('_').map(|i| i + from) {
        let close = s[open + 1..].find('_').map(|i| i + open + 1)?;
        if close > open + 1 {
            return Some(EmphasisMatch {
                start: open,
                inner_start: open + 1,
                inner_end: close,
                end: close + 1,
            });
        }
        from = open + 1;
    }
    None
}

/// Split text into normal/bold/italic segments in one left-to-right pass.
///
/// At each step the earliest unconsumed pair of either kind wins; a tie
/// on start offset goes to bold. Literal text between matches becomes
/// normal segments. Text without markers (or an empty string) yields a
/// single normal segment.
pub fn parse_inline(text: &str) -> Vec<TextSegment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;
    loop {
        let (kind, m) = match (find_bold(rest), find_italic(rest)) {
            (None, None) => break,
            (Some(b), None) => (SegmentKind::Bold, b),
            (None, Some(i)) => (SegmentKind::Italic, i),
            (Some(b), Some(i)) => {
                if b.start <= i.start {
                    (SegmentKind::Bold, b)
                } else {
                    (SegmentKind::Italic, i)
                }
            }
        };
        if m.start > 0 {
            segments.push(TextSegment::new(SegmentKind::Normal, &rest[..m.start]));
        }
        segments.push(TextSegment::new(kind, &rest[m.inner_start..m.inner_end]));
        rest = &rest[m.end..];
    }
    if !rest.is_empty() || segments.is_empty() {
        segments.push(TextSegment::new(SegmentKind::Normal, rest));
    }
    segments
}

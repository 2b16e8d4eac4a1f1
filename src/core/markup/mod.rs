//! Lightweight chat markup: fenced code blocks plus bold/italic emphasis.
//!
//! This is deliberately not a Markdown engine. Assistant replies use exactly
//! three constructs (``` fences, `**bold**`, `_italic_`); everything else is
//! literal text. Both passes are pure and never fail: malformed input
//! degrades to plain text or, for an unterminated fence, to a code part
//! covering the rest of the message.

mod inline;

#[cfg(test)]
mod tests;

pub use inline::parse_inline;

/// Classification of an inline segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Normal,
    Bold,
    Italic,
}

/// Smallest classified unit of text. Concatenating `text` across the
/// segments of one inline pass reproduces the input with the emphasis
/// markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

impl<'a> TextSegment<'a> {
    fn new(kind: SegmentKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Top-level part of a message: inline-parsed text, or one fenced code block
/// with its interior trimmed and the language tag split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart<'a> {
    Text(Vec<TextSegment<'a>>),
    Code { lang: &'a str, code: &'a str },
}

/// True when `line` is acceptable as a fence language tag (a single
/// alphanumeric word, e.g. "js" or "python3").
fn is_lang_tag(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Split a message into text and code parts, left to right.
///
/// Text before, between, and after fences goes through [`parse_inline`].
/// A fence without a closing marker consumes the remainder of the message
/// as code. Empty input yields a single text part holding one empty
/// normal segment.
pub fn parse_message(content: &str) -> Vec<MessagePart<'_>> {
    let mut parts = Vec::new();
    let mut rest = content;
    loop {
        match rest.find("```") {
            None => {
                if !rest.is_empty() || parts.is_empty() {
                    parts.push(MessagePart::Text(parse_inline(rest)));
                }
                break;
            }
            Some(idx) => {
                if idx > 0 {
                    parts.push(MessagePart::Text(parse_inline(&rest[..idx])));
                }
                rest = &rest[idx + 3..];
                // Language tag: a lone word on the opening line. Anything
                // else (including an empty line) is already code.
                let lang = match rest.find('\n') {
                    Some(nl) if is_lang_tag(&rest[..nl]) => {
                        let tag = &rest[..nl];
                        rest = &rest[nl + 1..];
                        tag
                    }
                    _ => "",
                };
                match rest.find("```") {
                    Some(end) => {
                        parts.push(MessagePart::Code {
                            lang,
                            code: rest[..end].trim(),
                        });
                        rest = &rest[end + 3..];
                    }
                    None => {
                        parts.push(MessagePart::Code {
                            lang,
                            code: rest.trim(),
                        });
                        break;
                    }
                }
            }
        }
    }
    parts
}

//! Normalization of raw model output into a `{content, sentiment}` reply.
//!
//! The model is instructed to answer with a JSON object, but real replies
//! arrive as bare JSON, JSON inside a ```json fence, JSON inside an untagged
//! fence, or plain prose. Normalization never fails: anything that cannot be
//! decoded degrades to the raw text with a neutral sentiment, so a malformed
//! upstream reply never blocks the chat.

use serde::{Deserialize, Serialize};

/// Coarse three-way classification attached to an assistant reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Normalized assistant reply. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
    pub sentiment: Sentiment,
}

/// Wire shape of a well-formed reply. `sentiment` is kept loose here so an
/// unknown label degrades on its own instead of discarding the content.
#[derive(Deserialize)]
struct RawReply {
    content: String,
    #[serde(default)]
    sentiment: Option<serde_json::Value>,
}

/// Interior of the first ```json fence (tag line and closing marker required).
fn json_fence(s: &str) -> Option<&str> {
    let start = s.find("```json\n")? + "```json\n".len();
    let rest = &s[start..];
    let end = rest.find("\n```")?;
    Some(&rest[..end])
}

/// Interior of the first closed fence of any kind.
fn any_fence(s: &str) -> Option<&str> {
    let start = s.find("```")? + 3;
    let rest = &s[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}

/// Pick the JSON candidate: a ```json fence, any fence, or the raw text.
/// Returns `None` when the trimmed candidate does not start an object.
fn json_candidate(raw: &str) -> Option<&str> {
    let candidate = json_fence(raw).or_else(|| any_fence(raw)).unwrap_or(raw);
    let candidate = candidate.trim();
    candidate.starts_with('{').then_some(candidate)
}

/// Normalize a raw model reply into content plus sentiment.
///
/// Extraction and decoding failures fall back to the full raw text with
/// [`Sentiment::Neutral`]. A decoded reply whose sentiment is not one of
/// the three known labels keeps its content and degrades the sentiment to
/// neutral.
pub fn normalize(raw: &str) -> ChatReply {
    let fallback = || ChatReply {
        content: raw.to_string(),
        sentiment: Sentiment::Neutral,
    };
    let Some(candidate) = json_candidate(raw) else {
        return fallback();
    };
    match serde_json::from_str::<RawReply>(candidate) {
        Ok(reply) => ChatReply {
            content: reply.content,
            sentiment: reply
                .sentiment
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default(),
        },
        Err(e) => {
            log::debug!("Reply is not a well-formed JSON object: {}", e);
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_fenced_json_with_tag() {
        let raw = "```json\n{\"content\":\"hi\",\"sentiment\":\"positive\"}\n```";
        let reply = normalize(raw);
        assert_eq!(reply.content, "hi");
        assert_eq!(reply.sentiment, Sentiment::Positive);
    }

    #[test]
    fn normalize_fenced_json_without_tag() {
        let raw = "```\n{\"content\":\"ok\",\"sentiment\":\"negative\"}\n```";
        let reply = normalize(raw);
        assert_eq!(reply.content, "ok");
        assert_eq!(reply.sentiment, Sentiment::Negative);
    }

    #[test]
    fn normalize_bare_json() {
        let raw = "{\"content\":\"bare\",\"sentiment\":\"neutral\"}";
        let reply = normalize(raw);
        assert_eq!(reply.content, "bare");
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn normalize_prose_falls_back_to_neutral() {
        let reply = normalize("I'm not sure");
        assert_eq!(reply.content, "I'm not sure");
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn normalize_invalid_json_falls_back_to_full_input() {
        let raw = "```\n{not valid json\n```";
        let reply = normalize(raw);
        assert_eq!(reply.content, raw);
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn normalize_missing_content_falls_back() {
        let raw = "{\"sentiment\":\"positive\"}";
        let reply = normalize(raw);
        assert_eq!(reply.content, raw);
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn normalize_unknown_sentiment_keeps_content() {
        let raw = "{\"content\":\"fine\",\"sentiment\":\"ecstatic\"}";
        let reply = normalize(raw);
        assert_eq!(reply.content, "fine");
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn normalize_missing_sentiment_defaults_to_neutral() {
        let reply = normalize("{\"content\":\"just content\"}");
        assert_eq!(reply.content, "just content");
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn normalize_json_fence_preferred_over_earlier_plain_fence() {
        let raw = "```json\n{\"content\":\"tagged\",\"sentiment\":\"positive\"}\n```";
        // Same input through the untagged path would include the tag line.
        assert_eq!(normalize(raw).content, "tagged");
    }

    #[test]
    fn normalize_fence_with_prose_around_it() {
        let raw = "Here you go:\n```json\n{\"content\":\"wrapped\",\"sentiment\":\"positive\"}\n```\nanything else?";
        let reply = normalize(raw);
        assert_eq!(reply.content, "wrapped");
        assert_eq!(reply.sentiment, Sentiment::Positive);
    }

    #[test]
    fn normalize_unterminated_fence_uses_raw_text() {
        // No closing marker: fence extraction fails, raw text is not an
        // object, so the whole input comes back verbatim.
        let raw = "```json\n{\"content\":\"hi\"}";
        let reply = normalize(raw);
        assert_eq!(reply.content, raw);
        assert_eq!(reply.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn normalize_idempotent_on_prose() {
        let first = normalize("hello");
        let second = normalize("hello");
        assert_eq!(first, second);
    }
}

//! Chat message model shared by history, the TUI, and prompt mode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::response::Sentiment;

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Present on assistant replies when the model classified the exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, content: String, sentiment: Option<Sentiment>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            sentiment,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), None)
    }

    pub fn assistant(content: impl Into<String>, sentiment: Option<Sentiment>) -> Self {
        Self::new(Role::Assistant, content.into(), sentiment)
    }
}

/// Single-line preview of message content. Truncates to max_len chars with ellipsis.
pub fn preview(content: &str, max_len: usize) -> String {
    let s = content.trim().replace('\n', " ");
    if s.chars().count() <= max_len {
        return s;
    }
    let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{}…", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_role_and_sentiment() {
        let user = Message::user("hello");
        assert_eq!(user.role, Role::User);
        assert!(user.sentiment.is_none());

        let reply = Message::assistant("hi", Some(Sentiment::Positive));
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.sentiment, Some(Sentiment::Positive));
    }

    #[test]
    fn messages_get_unique_ids() {
        let a = Message::user("a");
        let b = Message::user("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_round_trip_keeps_sentiment() {
        let msg = Message::assistant("reply", Some(Sentiment::Negative));
        let json = serde_json::to_string(&msg).expect("serialize");
        assert!(json.contains("\"sentiment\":\"negative\""));
        let back: Message = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.sentiment, Some(Sentiment::Negative));
        assert_eq!(back.content, "reply");
    }

    #[test]
    fn user_message_omits_sentiment_field() {
        let json = serde_json::to_string(&Message::user("q")).expect("serialize");
        assert!(!json.contains("sentiment"));
    }

    #[test]
    fn preview_short_content_unchanged() {
        assert_eq!(preview("short", 60), "short");
    }

    #[test]
    fn preview_flattens_newlines_and_truncates() {
        let p = preview("first line\nsecond line that keeps going on and on", 20);
        assert!(!p.contains('\n'));
        assert!(p.ends_with('…'));
        assert!(p.chars().count() <= 20);
    }
}

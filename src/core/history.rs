//! Chat transcript persistence through the key-value store.
//!
//! The whole transcript is one JSON document under a single key, written
//! back after every completed exchange and on exit.

use std::io;

use crate::core::message::Message;
use crate::core::response::Sentiment;
use crate::core::store::KvStore;

const MESSAGES_KEY: &str = "messages";

/// Greeting shown at the top of a fresh chat, in both languages.
const WELCOME: &str = "নমস্কাৰ! মই আপোনাৰ অসমীয়া সহায়ক। আপুনি মোক ইংৰাজী বা অসমীয়াত প্ৰশ্ন সুধিব পাৰে।\n\nHello! I am your Assamese assistant. You can ask me questions in English or Assamese.";

/// The assistant greeting that seeds an empty transcript.
pub fn welcome_message() -> Message {
    Message::assistant(WELCOME, Some(Sentiment::Positive))
}

/// Load the transcript. An absent or unreadable entry yields a fresh
/// transcript holding only the welcome message.
pub fn load(store: &dyn KvStore) -> Vec<Message> {
    let Some(data) = store.get(MESSAGES_KEY) else {
        return vec![welcome_message()];
    };
    match serde_json::from_str::<Vec<Message>>(&data) {
        Ok(messages) if !messages.is_empty() => messages,
        Ok(_) => vec![welcome_message()],
        Err(e) => {
            log::warn!("Stored transcript is unreadable, starting fresh: {}", e);
            vec![welcome_message()]
        }
    }
}

/// Persist the transcript.
pub fn save(store: &dyn KvStore, messages: &[Message]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(messages)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.set(MESSAGES_KEY, &json)
}

/// Drop the stored transcript. The next load starts fresh.
pub fn clear(store: &dyn KvStore) -> io::Result<()> {
    store.remove(MESSAGES_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;
    use crate::core::store::MemoryStore;

    #[test]
    fn load_empty_store_seeds_welcome() {
        let store = MemoryStore::default();
        let messages = load(&store);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert!(messages[0].content.contains("Assamese assistant"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::default();
        let transcript = vec![
            welcome_message(),
            Message::user("what is the capital of Assam?"),
            Message::assistant("Dispur.", Some(Sentiment::Neutral)),
        ];
        save(&store, &transcript).expect("save");
        let loaded = load(&store);
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].content, "what is the capital of Assam?");
        assert_eq!(loaded[2].sentiment, Some(Sentiment::Neutral));
    }

    #[test]
    fn corrupt_transcript_starts_fresh() {
        let store = MemoryStore::default();
        store.set("messages", "{broken").expect("set");
        let messages = load(&store);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
    }

    #[test]
    fn clear_resets_to_welcome() {
        let store = MemoryStore::default();
        save(&store, &[welcome_message(), Message::user("hi")]).expect("save");
        clear(&store).expect("clear");
        assert_eq!(load(&store).len(), 1);
    }
}

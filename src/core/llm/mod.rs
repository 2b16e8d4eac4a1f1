//! Single-turn chat call: prompt build, API request, reply normalization.

mod error;
mod prompt;

use async_openai::Client;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::response::{self, ChatReply};
use crate::core::settings::Language;

pub use error::{ChatError, map_api_error};
pub use prompt::build_prompt;

/// Generation parameters for the chat completion call.
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;
const MAX_TOKENS: u64 = 1024;

/// Extract the text content of the first choice from a chat completion
/// response. Handles both string content and array-of-blocks format.
fn extract_content(resp: &Value) -> Option<String> {
    let content = resp
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?;
    if let Some(s) = content.as_str() {
        return Some(s.to_string());
    }
    if let Some(blocks) = content.as_array() {
        for block in blocks {
            if let Some(text) = block.get("text").and_then(|t| t.as_str()) {
                return Some(text.to_string());
            }
        }
    }
    None
}

/// Send one user message and return the normalized reply.
///
/// Performs a single non-streaming chat-completion call; cancellation (Esc
/// in the TUI) aborts the await and surfaces as [`ChatError::Cancelled`].
/// A reply that arrives but cannot be decoded is not an error: it comes
/// back as raw content with neutral sentiment via the normalizer.
pub async fn send_message(
    config: &Config,
    message: &str,
    language: Language,
    cancel_token: Option<&CancellationToken>,
) -> Result<ChatReply, ChatError> {
    let client = Client::with_config(config.openai_config.clone());
    let prompt = build_prompt(message, language);

    log::debug!("Sending chat request to model {}", config.model_id);
    let chat_api = client.chat();
    let request = chat_api.create_byot::<_, Value>(json!({
        "model": config.model_id,
        "messages": [{"role": "user", "content": prompt}],
        "temperature": TEMPERATURE,
        "top_p": TOP_P,
        "max_tokens": MAX_TOKENS,
    }));

    let response = match cancel_token {
        Some(token) => tokio::select! {
            _ = token.cancelled() => return Err(ChatError::Cancelled),
            result = request => result,
        },
        None => request.await,
    }
    .map_err(map_api_error)?;

    let text = extract_content(&response).ok_or_else(|| {
        log::warn!("Unexpected API response shape: {}", response);
        ChatError::ApiMessage("The model returned an empty response".to_string())
    })?;

    Ok(response::normalize(&text))
}

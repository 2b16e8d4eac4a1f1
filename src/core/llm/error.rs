//! Chat and API error types.

/// Errors from the chat call.
#[derive(Debug)]
pub enum ChatError {
    /// Key rejected or missing on the provider side.
    ApiAuth(String),
    /// Error message reported inside the API response body.
    ApiMessage(String),
    /// The request was cancelled by the user.
    Cancelled,
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::ApiAuth(msg) => write!(f, "{}", msg),
            ChatError::ApiMessage(msg) => write!(f, "API error: {}", msg),
            ChatError::Cancelled => write!(f, "Request cancelled"),
            ChatError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Other(e) => e.source(),
            ChatError::Cancelled | ChatError::ApiAuth(_) | ChatError::ApiMessage(_) => None,
        }
    }
}

/// Map transport or API errors into ChatError. Gemini reports failures as
/// `{"error":{"code":…,"message":…,"status":…}}`; auth failures carry an
/// API_KEY_INVALID detail or a 401/403 status code.
pub fn map_api_error<E>(e: E) -> ChatError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if s.contains("API_KEY_INVALID") || s.contains("401") || s.contains("403") {
        return ChatError::ApiAuth(
            "The API rejected the key. Check GEMINI_API_KEY (or the key saved in settings)."
                .to_string(),
        );
    }
    if s.contains("\"error\"")
        && let Some((_, rest)) = s.split_once("\"message\":")
        && let Some((_, rest)) = rest.split_once('"')
        && let Some((msg, _)) = rest.split_once('"')
    {
        return ChatError::ApiMessage(msg.to_string());
    }
    ChatError::Other(e.into())
}

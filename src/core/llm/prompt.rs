//! Prompt construction for the bilingual assistant.

use crate::core::settings::Language;

/// Build the single-turn prompt: answer in the selected language, classify
/// the user's sentiment, and reply as a strict JSON object so the
/// normalizer can pick the reply apart.
pub fn build_prompt(message: &str, language: Language) -> String {
    let reply_language = match language {
        Language::English => "English",
        Language::Assamese => "Assamese",
    };
    format!(
        "You are an AI assistant that specializes in Assamese and English languages.\n\
         The user message is: \"{message}\".\n\
         Respond in {reply_language}.\n\n\
         Analyze the sentiment of the user's message (positive, negative, or neutral).\n\n\
         Provide the response in the exact JSON format:\n\
         {{\n\
         \x20 \"content\": \"Provide the detailed response, and include any code snippets using proper markdown with triple backticks and language labels.\",\n\
         \x20 \"sentiment\": \"positive/negative/neutral\"\n\
         }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_message_and_language() {
        let p = build_prompt("how are you?", Language::English);
        assert!(p.contains("\"how are you?\""));
        assert!(p.contains("Respond in English."));
    }

    #[test]
    fn prompt_switches_to_assamese() {
        let p = build_prompt("নমস্কাৰ", Language::Assamese);
        assert!(p.contains("Respond in Assamese."));
        assert!(p.contains("নমস্কাৰ"));
    }

    #[test]
    fn prompt_requests_json_with_sentiment() {
        let p = build_prompt("hi", Language::English);
        assert!(p.contains("\"sentiment\""));
        assert!(p.contains("\"content\""));
    }
}

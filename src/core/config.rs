//! Runtime configuration from environment variables and the stored key.

use std::env;

use async_openai::config::OpenAIConfig;

use crate::core::api_key;

/// Gemini's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub model_id: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(
                f,
                "GEMINI_API_KEY is not set and no stored key was found. Export GEMINI_API_KEY or add a key in the settings panel (Alt+S)."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration. The API key comes from the environment first, then
/// from the key stored by the settings panel.
pub fn load() -> Result<Config, ConfigError> {
    let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let api_key = env::var("GEMINI_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or_else(api_key::load_api_key)
        .ok_or(ConfigError::MissingApiKey)?;

    let model_id = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url)
        .with_api_key(api_key);

    Ok(Config {
        openai_config,
        model_id,
    })
}

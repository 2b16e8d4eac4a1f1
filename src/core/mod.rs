pub mod api_key;
pub mod app;
pub mod config;
pub mod history;
pub mod keyboard;
pub mod llm;
pub mod markup;
pub mod message;
pub mod paths;
pub mod response;
pub mod settings;
pub mod store;

//! Application run modes: logger init, single prompt, subcommands, TUI launch.

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::message::Role;
use crate::core::settings::Language;
use crate::core::store::{FileStore, KvStore};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.prompt.is_none() && args.command.is_none() {
        let log_path = core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)));
        if let Some(path) = log_path
            && let Some(dir) = path.parent()
            && std::fs::create_dir_all(dir).is_ok()
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Reply language for this run: CLI flag first, then the saved setting.
fn resolve_language(args: &Args, store: &dyn KvStore) -> Language {
    args.language
        .map(Language::from)
        .unwrap_or_else(|| core::settings::load(store).language)
}

/// Run single prompt mode: send one message, print the normalized reply.
pub async fn run_single_prompt(
    args: &Args,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt_arg = args.prompt.as_ref().expect("prompt is some");
    let prompt = if prompt_arg == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        prompt_arg.clone()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let store = FileStore::open();
    let language = match &store {
        Some(s) => resolve_language(args, s),
        None => args.language.map(Language::from).unwrap_or_default(),
    };

    let mut config = config.clone();
    if let Some(model) = &args.model {
        config.model_id = model.clone();
    }

    let reply = core::llm::send_message(&config, prompt, language, None).await?;
    println!("{}", reply.content);
    // Sentiment goes to stderr so stdout stays pipeable.
    eprintln!("[sentiment: {}]", reply.sentiment.as_str());
    Ok(())
}

/// Print config paths, model, and API key status.
pub fn run_config() {
    println!("{} {}", core::app::NAME, core::app::VERSION);
    let config_dir = core::paths::config_dir();
    let data_dir = core::paths::data_dir();
    println!(
        "config dir: {}",
        config_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    );
    println!(
        "data dir:   {}",
        data_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    );
    println!(
        "model:      {}",
        std::env::var("GEMINI_MODEL").unwrap_or_else(|_| core::config::DEFAULT_MODEL.to_string())
    );

    let from_env = std::env::var("GEMINI_API_KEY").is_ok_and(|k| !k.trim().is_empty());
    let stored = core::api_key::load_api_key().is_some();
    let status = match (from_env, stored) {
        (true, _) => "set via GEMINI_API_KEY",
        (false, true) => "stored in config dir",
        (false, false) => "not set",
    };
    println!("API key:    {}", status);
}

/// Print the saved transcript, oldest first.
pub fn run_history_show(limit: Option<usize>) {
    let Some(store) = FileStore::open() else {
        eprintln!("Error: no data directory available");
        std::process::exit(1);
    };
    let messages = core::history::load(&store);
    let skip = limit
        .map(|n| messages.len().saturating_sub(n))
        .unwrap_or(0);
    for msg in &messages[skip..] {
        let who = match msg.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        let badge = msg
            .sentiment
            .map(|s| format!(" [{}]", s.as_str()))
            .unwrap_or_default();
        println!(
            "{} {}{}: {}",
            msg.timestamp.format("%Y-%m-%d %H:%M"),
            who,
            badge,
            core::message::preview(&msg.content, 100)
        );
    }
}

/// Delete the saved transcript.
pub fn run_history_clear() {
    let Some(store) = FileStore::open() else {
        eprintln!("Error: no data directory available");
        std::process::exit(1);
    };
    match core::history::clear(&store) {
        Ok(()) => println!("Chat history cleared."),
        Err(e) => {
            eprintln!("Error: failed to clear history: {}", e);
            std::process::exit(1);
        }
    }
}

//! # luitchat — bilingual Assamese/English chat assistant
//!
//! Entry point. Two primary modes:
//! 1. Single prompt mode (with `-p`)
//! 2. Interactive terminal UI (default)
//!
//! Plus `config` and `history` subcommands for inspection and cleanup.

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

use cli::{Args, Commands, HistorySubcommand};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Subcommands that need no API key
    match &args.command {
        Some(Commands::Config) => {
            run::run_config();
            return Ok(());
        }
        Some(Commands::History { subcommand }) => {
            match subcommand {
                HistorySubcommand::Show { limit } => run::run_history_show(*limit),
                HistorySubcommand::Clear => run::run_history_clear(),
            }
            return Ok(());
        }
        None => {}
    }

    // Chat modes need the configuration (print user-friendly message; exit uses Display not Debug)
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if args.prompt.is_some() {
        return run::run_single_prompt(&args, &config).await;
    }

    // Default behavior: open the TUI (interactive chat).
    // Spawns a blocking thread to avoid runtime contention.
    let config = std::sync::Arc::new(config);
    let language_override = args.language.map(Into::into);
    let join_result: Result<std::io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || tui::run(config, language_override)).await;

    // Surface the actual panic message for debugging
    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(Box::new(std::io::Error::other("TUI thread panicked"))
                as Box<dyn std::error::Error>);
        }
    }

    Ok(())
}

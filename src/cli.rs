//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::core::settings::Language;

const AFTER_HELP: &str = "\
EXAMPLES:
  luitchat                          Launch the interactive chat TUI
  luitchat -p \"কেনে আছা?\"           Single prompt, print the reply to stdout
  luitchat -p - -l assamese         Read prompt from stdin, answer in Assamese
  luitchat config                   Show config paths and key status
  luitchat history show             Print the saved transcript
  luitchat history clear            Delete the saved transcript
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Assamese/English bilingual AI chat assistant for the terminal",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Provide a prompt to get an immediate reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Reply language; overrides the saved setting
    #[arg(short = 'l', long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Override the model for this run
    #[arg(short = 'm', long, help = "Model ID (e.g. gemini-2.0-flash)")]
    pub model: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config paths, model, and API key status
    Config,
    /// Manage the saved chat transcript
    History {
        #[command(subcommand)]
        subcommand: HistorySubcommand,
    },
}

#[derive(Subcommand)]
pub enum HistorySubcommand {
    /// Print the saved transcript
    Show {
        /// Show only the most recent N messages
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete the saved transcript
    Clear,
}

/// Reply language as a CLI value.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    English,
    Assamese,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Assamese => Language::Assamese,
        }
    }
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

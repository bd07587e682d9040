//! Ordspill - CLI
//!
//! Hangman and Wordle for the terminal, with a TUI and a plain
//! line mode for dumb terminals.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use ordspill::{
    commands::{run_hangman, run_wordle},
    interactive::{App, run_tui},
    wordlists::{WordList, loader::load_from_file},
};
use std::io;

#[derive(Parser)]
#[command(
    name = "ordspill",
    about = "Hangman and Wordle in the terminal, over a Norwegian word list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI with both games (default)
    Play,

    /// Line-mode Wordle without the TUI
    Wordle,

    /// Line-mode Hangman without the TUI
    Hangman,
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(WordList::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from '{path}'"))?;
            WordList::new(words)
                .with_context(|| format!("No usable 5-letter words in '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    info!("word list ready: {} words", words.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(&words)),
        Commands::Wordle => run_wordle(&words, io::stdin().lock()),
        Commands::Hangman => run_hangman(&words, io::stdin().lock()),
    }
}

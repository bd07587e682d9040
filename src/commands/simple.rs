//! Simple line-mode play
//!
//! Text-based play without the TUI, for dumb terminals and scripted
//! use. Input arrives over any `BufRead`, so the loops are testable
//! with an in-memory cursor.

use crate::core::{Verdict, WORD_LENGTH};
use crate::games::hangman::{GuessOutcome, MAX_WRONG_GUESSES};
use crate::games::wordle::{ScoredGuess, SubmitOutcome};
use crate::games::{HangmanGame, Phase, WordleGame};
use crate::wordlists::WordList;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run line-mode Wordle until the reader runs dry or the player quits
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_wordle<R: BufRead>(words: &WordList, mut reader: R) -> Result<()> {
    print_banner("W O R D L E");
    println!("Find the 5-letter word in 6 guesses.");
    println!("Commands: 'new' for a new round, 'quit' to exit.\n");

    let mut game = WordleGame::new(words.pick(&mut rand::rng()).clone());

    loop {
        let Some(input) = prompt_line(&mut reader, "Guess")? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "new" | "n" => {
                game.reset(words.pick(&mut rand::rng()).clone());
                println!("New round started.\n");
                continue;
            }
            _ => {}
        }

        if game.phase().is_over() {
            println!("The round is over. Type 'new' for another or 'quit' to exit.");
            continue;
        }

        if input.chars().count() != WORD_LENGTH {
            println!("Please enter a 5-letter word.");
            continue;
        }

        // Retype the line into the guess buffer
        for _ in 0..WORD_LENGTH {
            game.delete_letter();
        }
        for c in input.chars() {
            game.push_letter(c);
        }

        match game.submit(words, Instant::now()) {
            SubmitOutcome::Ignored => {
                println!("Please enter a 5-letter word.");
            }
            SubmitOutcome::NotAWord => {
                println!("{} is not in the word list.", input.to_uppercase());
            }
            SubmitOutcome::Accepted => {
                for row in game.rows() {
                    println!("  {}", format_row(row));
                }
                match game.phase() {
                    Phase::Won => {
                        let guesses = game.rows().len();
                        println!(
                            "\n{} Solved in {guesses} {}.",
                            "You got it!".bright_green().bold(),
                            if guesses == 1 { "guess" } else { "guesses" }
                        );
                        println!("Type 'new' for another round or 'quit' to exit.\n");
                    }
                    Phase::Lost => {
                        if let Some(target) = game.revealed_target() {
                            println!(
                                "\n{} The word was {}.",
                                "Out of guesses.".bright_red().bold(),
                                target.text().bright_yellow().bold()
                            );
                        }
                        println!("Type 'new' for another round or 'quit' to exit.\n");
                    }
                    Phase::Playing => {}
                }
            }
        }
    }

    println!("\nThanks for playing!\n");
    Ok(())
}

/// Run line-mode Hangman until the reader runs dry or the player quits
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_hangman<R: BufRead>(words: &WordList, mut reader: R) -> Result<()> {
    print_banner("H A N G M A N");
    println!("Guess the word one letter at a time; {MAX_WRONG_GUESSES} misses and you hang.");
    println!("Commands: 'new' for a new round, 'quit' to exit.\n");

    let mut game = HangmanGame::new(words.pick(&mut rand::rng()).clone());

    loop {
        print_hangman_state(&game);

        let Some(input) = prompt_line(&mut reader, "Letter")? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                game.reset(words.pick(&mut rand::rng()).clone());
                println!("New round started.\n");
                continue;
            }
            _ => {}
        }

        if game.phase().is_over() {
            println!("The round is over. Type 'new' for another or 'quit' to exit.");
            continue;
        }

        let Some(letter) = input.chars().next() else {
            continue;
        };

        match game.guess(letter) {
            GuessOutcome::Hit => println!("{}", "Good guess!".bright_green()),
            GuessOutcome::Miss => println!(
                "{} ({}/{MAX_WRONG_GUESSES} wrong)",
                "Not in the word.".bright_red(),
                game.wrong_guesses()
            ),
            GuessOutcome::Ignored => println!("Already guessed, or not a letter."),
        }

        match game.phase() {
            Phase::Won => {
                println!(
                    "\n{} The word was {}.",
                    "You got it!".bright_green().bold(),
                    game.masked_word().bright_yellow().bold()
                );
                println!("Type 'new' for another round or 'quit' to exit.\n");
            }
            Phase::Lost => {
                if let Some(target) = game.revealed_target() {
                    println!(
                        "\n{} The word was {}.",
                        "You hang.".bright_red().bold(),
                        target.text().bright_yellow().bold()
                    );
                }
                println!("Type 'new' for another round or 'quit' to exit.\n");
            }
            Phase::Playing => {}
        }
    }

    println!("\nThanks for playing!\n");
    Ok(())
}

fn print_banner(title: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

fn print_hangman_state(game: &HangmanGame) {
    if game.phase() == Phase::Playing {
        let masked: String = game.masked_word().chars().flat_map(|c| [c, ' ']).collect();
        let wrong: String = game.wrong_letters().flat_map(|c| [c, ' ']).collect();
        println!("\nWord:   {}", masked.trim_end().bold());
        if !wrong.is_empty() {
            println!("Missed: {}", wrong.trim_end().bright_red());
        }
    }
}

fn format_row(row: &ScoredGuess) -> String {
    row.cells()
        .map(|(letter, verdict)| {
            let cell = format!(" {letter} ");
            match verdict {
                Verdict::Correct => cell.black().on_bright_green().bold().to_string(),
                Verdict::Present => cell.black().on_bright_yellow().to_string(),
                Verdict::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Prompt and read one trimmed line; `None` on end of input
fn prompt_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn single_word_list(word: &str) -> WordList {
        WordList::new(words_from_slice(&[word])).unwrap()
    }

    #[test]
    fn wordle_immediate_quit() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("quit\n");
        run_wordle(&words, reader).unwrap();
    }

    #[test]
    fn wordle_runs_dry_without_quit() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("");
        run_wordle(&words, reader).unwrap();
    }

    #[test]
    fn wordle_win_then_quit() {
        // Single-word list, so the target is always SKOLE
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("skole\nquit\n");
        run_wordle(&words, reader).unwrap();
    }

    #[test]
    fn wordle_rejects_short_and_unknown_guesses() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("abc\nxxxxx\nskole\nquit\n");
        run_wordle(&words, reader).unwrap();
    }

    #[test]
    fn wordle_new_round_after_win() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("skole\nnew\nskole\nquit\n");
        run_wordle(&words, reader).unwrap();
    }

    #[test]
    fn hangman_immediate_quit() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("quit\n");
        run_hangman(&words, reader).unwrap();
    }

    #[test]
    fn hangman_win_by_letters() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("s\nk\no\nl\ne\nquit\n");
        run_hangman(&words, reader).unwrap();
    }

    #[test]
    fn hangman_loss_then_new_round() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("a\nb\nc\nd\nf\ng\nnew\nquit\n");
        run_hangman(&words, reader).unwrap();
    }

    #[test]
    fn hangman_ignores_junk_input() {
        let words = single_word_list("SKOLE");
        let reader = Cursor::new("\n3\ns\ns\nquit\n");
        run_hangman(&words, reader).unwrap();
    }
}

//! Ordspill
//!
//! Two terminal word games over a shared Norwegian word list: a
//! Hangman variant and a Wordle variant. Each game is a self-contained
//! state machine driven by key presses; the TUI and the line mode are
//! thin front-ends over the same engines.
//!
//! # Quick Start
//!
//! ```rust
//! use ordspill::core::{Verdict, Word, score};
//!
//! let guess = Word::new("roars").unwrap();
//! let target = Word::new("error").unwrap();
//!
//! let verdicts = score(&guess, &target);
//! assert_eq!(verdicts[0], Verdict::Present);
//! ```

// Core domain types
pub mod core;

// Game session state machines
pub mod games;

// Word lists
pub mod wordlists;

// Line-mode front-end
pub mod commands;

// Interactive TUI interface
pub mod interactive;

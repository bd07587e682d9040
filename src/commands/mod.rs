//! Line-mode front-end

pub mod simple;

pub use simple::{run_hangman, run_wordle};

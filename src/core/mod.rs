//! Core domain types for both games
//!
//! This module contains the fundamental domain types with zero UI dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

pub mod alphabet;
mod verdict;
mod word;

pub use verdict::{Verdict, score};
pub use word::{WORD_LENGTH, Word, WordError};

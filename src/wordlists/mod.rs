//! Word lists for both games
//!
//! Provides the embedded word list compiled into the binary plus the
//! [`WordList`] collaborator the game sessions use: uniform-random
//! target selection and case-insensitive membership testing.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// An ordered, non-empty word list with a membership index
///
/// Non-emptiness is a constructor invariant, so [`WordList::pick`] can
/// always return a word.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from validated words
    ///
    /// # Errors
    /// Returns [`WordListError::Empty`] if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Ok(Self { words, index })
    }

    /// The embedded list shipped in the binary
    ///
    /// # Panics
    /// Will not panic - the build script guarantees the embedded list
    /// is non-empty and valid.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is non-empty")
    }

    /// Draw a uniformly-random word
    #[must_use]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Case-insensitive membership test
    ///
    /// Anything that does not even parse as a word is not a member.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|w| self.index.contains(w.text()))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(loader::words_from_slice(words)).unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(
            WordList::new(Vec::new()),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn membership_is_case_insensitive() {
        let l = list(&["SKOLE", "BLÅSE"]);
        assert!(l.contains("SKOLE"));
        assert!(l.contains("skole"));
        assert!(l.contains("blåse"));
        assert!(!l.contains("VEIEN"));
    }

    #[test]
    fn membership_rejects_malformed_input() {
        let l = list(&["SKOLE"]);
        assert!(!l.contains("SKOL"));
        assert!(!l.contains("SK0LE"));
        assert!(!l.contains(""));
    }

    #[test]
    fn pick_draws_members() {
        let l = list(&["SKOLE", "BLÅSE", "VEIEN"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let word = l.pick(&mut rng);
            assert!(l.contains(word.text()));
        }
    }

    #[test]
    fn pick_eventually_reaches_every_word() {
        let l = list(&["SKOLE", "BLÅSE", "VEIEN"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..256 {
            seen.insert(l.pick(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn embedded_list_loads() {
        let l = WordList::embedded();
        assert_eq!(l.len(), WORDS_COUNT);
        assert!(!l.is_empty());
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.chars().count(), 5, "word '{word}' is not 5 letters");
            assert!(
                word.chars()
                    .all(|c| crate::core::alphabet::is_letter(c)),
                "word '{word}' contains letters outside the alphabet"
            );
        }
    }

    #[test]
    fn embedded_list_uses_the_extra_letters() {
        let special = WORDS
            .iter()
            .filter(|w| w.chars().any(|c| matches!(c, 'Æ' | 'Ø' | 'Å')))
            .count();
        assert!(special > 0, "expected some words with Æ/Ø/Å");
    }
}

//! Guess scoring and per-position verdicts
//!
//! A verdict is the outcome for one guess position:
//! - `Absent`: the letter has no unconsumed occurrence in the target
//! - `Present`: the letter occurs elsewhere in the target
//! - `Correct`: the letter is in the right position
//!
//! The derived ordering (`Absent < Present < Correct`) doubles as the
//! keyboard-hint lattice: a letter's displayed hint only ever moves up.

use super::word::{WORD_LENGTH, Word};

/// Per-position scoring outcome for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Lattice join: keep the best evidence seen so far
    ///
    /// `Absent` is overwritten by `Present` or `Correct`, `Present` can
    /// be upgraded to `Correct`, and `Correct` is never downgraded.
    ///
    /// # Examples
    /// ```
    /// use ordspill::core::Verdict;
    ///
    /// assert_eq!(Verdict::Absent.merge(Verdict::Present), Verdict::Present);
    /// assert_eq!(Verdict::Correct.merge(Verdict::Absent), Verdict::Correct);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Score a guess against the target word
///
/// Implements the standard two-pass rules, including proper handling of
/// duplicate letters:
/// 1. First pass: mark exact position matches as `Correct` and consume
///    those target letters.
/// 2. Second pass: for each remaining position, mark `Present` if the
///    guessed letter still has an unconsumed occurrence in the target
///    (consuming one), otherwise `Absent`.
///
/// Consuming from a per-letter pool is equivalent to always taking the
/// lowest unconsumed target index, so results are deterministic, and a
/// target letter is never counted twice.
///
/// # Examples
/// ```
/// use ordspill::core::{Verdict, Word, score};
///
/// let guess = Word::new("HØRTE").unwrap();
/// let verdicts = score(&guess, &guess);
/// assert!(verdicts.iter().all(|&v| v == Verdict::Correct));
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> [Verdict; WORD_LENGTH] {
    let mut result = [Verdict::Absent; WORD_LENGTH];
    let mut available = target.letter_counts();

    // First pass: exact position matches
    // Allow: index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == target.char_at(i) {
            result[i] = Verdict::Correct;

            if let Some(count) = available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present-but-misplaced from the remaining pool
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == Verdict::Absent {
            let letter = guess.char_at(i);
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }
    }

    result
}

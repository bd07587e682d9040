//! Wordle session state machine
//!
//! Tracks the target word, the scored rows submitted so far, the
//! in-progress guess buffer and the per-letter keyboard hints. Guesses
//! are validated against the word list on submit; unknown words are
//! rejected with a transient notice and change nothing else.

use super::notice::NoticeBoard;
use super::Phase;
use crate::core::{Verdict, WORD_LENGTH, Word, alphabet, score};
use crate::wordlists::WordList;
use log::debug;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Rows available before the game is lost
pub const MAX_GUESSES: usize = 6;

/// A submitted guess with its per-position verdicts
#[derive(Debug, Clone)]
pub struct ScoredGuess {
    word: Word,
    verdicts: [Verdict; WORD_LENGTH],
}

impl ScoredGuess {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// Letter/verdict pairs in position order, for the grid renderer
    pub fn cells(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.word.chars().iter().copied().zip(self.verdicts)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was scored and appended as a row
    Accepted,
    /// Not in the word list; a notice was posted, nothing else changed
    NotAWord,
    /// Buffer not full yet, or the game is already over
    Ignored,
}

/// One Wordle round
#[derive(Debug, Clone)]
pub struct WordleGame {
    target: Word,
    rows: Vec<ScoredGuess>,
    buffer: Vec<char>,
    hints: FxHashMap<char, Verdict>,
    notices: NoticeBoard,
    phase: Phase,
}

impl WordleGame {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            rows: Vec::new(),
            buffer: Vec::new(),
            hints: FxHashMap::default(),
            notices: NoticeBoard::new(),
            phase: Phase::Playing,
        }
    }

    /// Append a letter to the guess buffer
    ///
    /// Input is case-normalized at the alphabet boundary; anything
    /// unrecognized is ignored, as is input once the buffer is full or
    /// the game is over.
    pub fn push_letter(&mut self, input: char) {
        if self.phase.is_over() || self.buffer.len() >= WORD_LENGTH {
            return;
        }
        if let Some(letter) = alphabet::recognize(input) {
            self.buffer.push(letter);
        }
    }

    /// Remove the last buffered letter
    pub fn delete_letter(&mut self) {
        if !self.phase.is_over() {
            self.buffer.pop();
        }
    }

    /// Submit the buffered guess
    ///
    /// Only acts when the buffer is full and the game is running. An
    /// unknown word is rejected: the buffer stays as typed and a
    /// transient notice is posted with `now` as its start time. A valid
    /// word is scored, appended, merged into the keyboard hints and the
    /// buffer cleared; the phase advances to `Won` on an exact match or
    /// to `Lost` when the sixth row misses.
    pub fn submit(&mut self, words: &WordList, now: Instant) -> SubmitOutcome {
        if self.phase.is_over() || self.buffer.len() != WORD_LENGTH {
            return SubmitOutcome::Ignored;
        }

        let text: String = self.buffer.iter().collect();
        let Ok(guess) = Word::new(&text) else {
            // Buffer letters all came through the alphabet boundary
            return SubmitOutcome::Ignored;
        };

        if !words.contains(guess.text()) {
            debug!("rejected guess not in word list: {text}");
            self.notices.post(format!("{text} is not in the word list"), now);
            return SubmitOutcome::NotAWord;
        }

        let verdicts = score(&guess, &self.target);
        for (letter, verdict) in guess.chars().iter().copied().zip(verdicts) {
            self.hints
                .entry(letter)
                .and_modify(|h| *h = h.merge(verdict))
                .or_insert(verdict);
        }

        let won = guess == self.target;
        self.rows.push(ScoredGuess {
            word: guess,
            verdicts,
        });
        self.buffer.clear();

        if won {
            debug!("wordle won in {} guesses", self.rows.len());
            self.phase = Phase::Won;
        } else if self.rows.len() >= MAX_GUESSES {
            debug!("wordle lost: {}", self.target);
            self.phase = Phase::Lost;
        }

        SubmitOutcome::Accepted
    }

    /// Start a fresh round against a new target
    pub fn reset(&mut self, target: Word) {
        debug!("wordle reset, new target drawn");
        *self = Self::new(target);
    }

    /// Drop expired notices
    pub fn tick(&mut self, now: Instant) {
        self.notices.prune(now);
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[ScoredGuess] {
        &self.rows
    }

    /// The letters typed so far for the next guess
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// The target word, revealed only once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.phase.is_over().then_some(&self.target)
    }

    /// Best verdict seen for a letter across all submitted rows
    #[must_use]
    pub fn hint(&self, letter: char) -> Option<Verdict> {
        self.hints.get(&letter).copied()
    }

    #[inline]
    #[must_use]
    pub const fn notices(&self) -> &NoticeBoard {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn list() -> WordList {
        WordList::new(words_from_slice(&[
            "SKOLE", "BLÅSE", "VEIEN", "HØRTE", "FELLE", "GÅTEN", "SPEIL",
        ]))
        .unwrap()
    }

    fn game(target: &str) -> WordleGame {
        WordleGame::new(Word::new(target).unwrap())
    }

    fn type_word(g: &mut WordleGame, word: &str) {
        for c in word.chars() {
            g.push_letter(c);
        }
    }

    fn submit_word(g: &mut WordleGame, words: &WordList, word: &str) -> SubmitOutcome {
        type_word(g, word);
        g.submit(words, Instant::now())
    }

    #[test]
    fn buffer_edits_respect_bounds() {
        let mut g = game("SKOLE");
        type_word(&mut g, "veienx");
        assert_eq!(g.buffer(), &['V', 'E', 'I', 'E', 'N']);

        g.delete_letter();
        g.delete_letter();
        assert_eq!(g.buffer(), &['V', 'E', 'I']);

        g.delete_letter();
        g.delete_letter();
        g.delete_letter();
        g.delete_letter();
        assert_eq!(g.buffer(), &[] as &[char]);
    }

    #[test]
    fn buffer_filters_unrecognized_input() {
        let mut g = game("SKOLE");
        g.push_letter('v');
        g.push_letter('3');
        g.push_letter(' ');
        g.push_letter('ø');
        assert_eq!(g.buffer(), &['V', 'Ø']);
    }

    #[test]
    fn submit_requires_full_buffer() {
        let words = list();
        let mut g = game("SKOLE");
        type_word(&mut g, "VEI");
        assert_eq!(g.submit(&words, Instant::now()), SubmitOutcome::Ignored);
        assert!(g.rows().is_empty());
        assert_eq!(g.buffer(), &['V', 'E', 'I']);
    }

    #[test]
    fn unknown_word_rejected_with_notice() {
        let words = list();
        let mut g = game("SKOLE");
        type_word(&mut g, "XXXXX");
        assert_eq!(g.submit(&words, Instant::now()), SubmitOutcome::NotAWord);

        // Rejection never advances the submitted rows
        assert!(g.rows().is_empty());
        assert_eq!(g.buffer(), &['X', 'X', 'X', 'X', 'X']);
        assert_eq!(g.phase(), Phase::Playing);
        assert_eq!(g.notices().len(), 1);
        assert!(
            g.notices()
                .iter()
                .next()
                .unwrap()
                .text()
                .contains("XXXXX")
        );
    }

    #[test]
    fn submitting_the_target_wins_with_all_correct() {
        let words = list();
        let mut g = game("SKOLE");
        assert_eq!(submit_word(&mut g, &words, "skole"), SubmitOutcome::Accepted);

        assert_eq!(g.phase(), Phase::Won);
        assert_eq!(g.rows().len(), 1);
        assert!(
            g.rows()[0]
                .verdicts()
                .iter()
                .all(|&v| v == Verdict::Correct)
        );
        assert_eq!(g.revealed_target().map(Word::text), Some("SKOLE"));
    }

    #[test]
    fn six_misses_lose_and_reveal_the_target() {
        let words = list();
        let mut g = game("SPEIL");
        for word in ["SKOLE", "BLÅSE", "VEIEN", "HØRTE", "FELLE", "GÅTEN"] {
            assert_eq!(g.phase(), Phase::Playing);
            assert_eq!(submit_word(&mut g, &words, word), SubmitOutcome::Accepted);
        }

        assert_eq!(g.rows().len(), MAX_GUESSES);
        assert_eq!(g.phase(), Phase::Lost);
        assert_eq!(g.revealed_target().map(Word::text), Some("SPEIL"));
    }

    #[test]
    fn target_hidden_while_playing() {
        let words = list();
        let mut g = game("SPEIL");
        assert_eq!(g.revealed_target(), None);
        submit_word(&mut g, &words, "SKOLE");
        assert_eq!(g.revealed_target(), None);
    }

    #[test]
    fn input_after_game_end_ignored() {
        let words = list();
        let mut g = game("SKOLE");
        submit_word(&mut g, &words, "SKOLE");
        assert_eq!(g.phase(), Phase::Won);

        g.push_letter('A');
        assert_eq!(g.buffer(), &[] as &[char]);
        g.delete_letter();
        assert_eq!(g.submit(&words, Instant::now()), SubmitOutcome::Ignored);
        assert_eq!(g.rows().len(), 1);
    }

    #[test]
    fn hints_record_best_evidence() {
        let words = list();
        let mut g = game("GÅTEN");
        submit_word(&mut g, &words, "SKOLE");
        // E at position 4 of SKOLE vs position 3 of GÅTEN: Present
        assert_eq!(g.hint('E'), Some(Verdict::Present));
        assert_eq!(g.hint('S'), Some(Verdict::Absent));
        assert_eq!(g.hint('Å'), None);

        submit_word(&mut g, &words, "GÅTEN");
        assert_eq!(g.hint('E'), Some(Verdict::Correct));
        assert_eq!(g.hint('Å'), Some(Verdict::Correct));
        // Earlier evidence is never downgraded
        assert_eq!(g.hint('S'), Some(Verdict::Absent));
    }

    #[test]
    fn hints_never_downgrade() {
        let words = list();
        let mut g = game("FELLE");
        submit_word(&mut g, &words, "BLÅSE");
        // L at position 1 of BLÅSE vs position 2/3 of FELLE: Present
        assert_eq!(g.hint('L'), Some(Verdict::Present));

        submit_word(&mut g, &words, "SKOLE");
        // L at position 3 of SKOLE is Correct in FELLE; upgraded
        assert_eq!(g.hint('L'), Some(Verdict::Correct));

        submit_word(&mut g, &words, "VEIEN");
        // No L at all; hint must stay Correct
        assert_eq!(g.hint('L'), Some(Verdict::Correct));
    }

    #[test]
    fn repeated_guesses_are_allowed_and_count() {
        let words = list();
        let mut g = game("SPEIL");
        for _ in 0..MAX_GUESSES {
            assert_eq!(submit_word(&mut g, &words, "SKOLE"), SubmitOutcome::Accepted);
        }
        assert_eq!(g.phase(), Phase::Lost);
    }

    #[test]
    fn reset_clears_everything() {
        let words = list();
        let mut g = game("SKOLE");
        type_word(&mut g, "XXXXX");
        g.submit(&words, Instant::now());
        assert_eq!(g.notices().len(), 1);
        for _ in 0..WORD_LENGTH {
            g.delete_letter();
        }
        submit_word(&mut g, &words, "VEIEN");
        assert_eq!(g.rows().len(), 1);

        g.reset(Word::new("HØRTE").unwrap());
        assert_eq!(g.phase(), Phase::Playing);
        assert!(g.rows().is_empty());
        assert_eq!(g.buffer(), &[] as &[char]);
        assert!(g.notices().is_empty());
        assert_eq!(g.hint('E'), None);
        assert_eq!(g.revealed_target(), None);
    }

    #[test]
    fn tick_expires_notices() {
        let words = list();
        let mut g = game("SKOLE");
        let now = Instant::now();
        type_word(&mut g, "XXXXX");
        g.submit(&words, now);
        assert_eq!(g.notices().len(), 1);

        g.tick(now + crate::games::notice::NOTICE_TTL + std::time::Duration::from_millis(1));
        assert!(g.notices().is_empty());
    }
}

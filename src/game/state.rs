//! State of a single Hangman round.

use std::collections::BTreeSet;

use glam::Vec2;
use rand::Rng;

use crate::game::letters::LetterGrid;
use crate::game::subject::Subject;

/// Wrong guesses that complete the drawing and lose the round.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Result of guessing one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word.
    Hit,
    /// The letter is absent; the wrong-guess count went up.
    Miss,
    /// Already guessed, or not an A-Z letter. Nothing changed.
    Ignored,
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

/// Everything that changes during a round.
///
/// Invariants: `word` is uppercase A-Z, every guessed letter is A-Z and
/// appears once, `wrong_guesses <= MAX_WRONG_GUESSES`, and a letter button
/// is hidden exactly when its letter has been guessed.
#[derive(Debug, Clone)]
pub struct GameState {
    subject: Subject,
    word: &'static str,
    guessed: BTreeSet<char>,
    wrong_guesses: u8,
    hint_visible: bool,
    letters: LetterGrid,
}

impl GameState {
    /// Start a round with a random word from `subject`.
    pub fn new<R: Rng + ?Sized>(subject: Subject, rng: &mut R) -> Self {
        Self::with_word(subject, subject.random_word(rng))
    }

    /// Start a round with a fixed word.
    pub(crate) fn with_word(subject: Subject, word: &'static str) -> Self {
        Self {
            subject,
            word,
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            hint_visible: false,
            letters: LetterGrid::new(),
        }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn word(&self) -> &'static str {
        self.word
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn hint(&self) -> String {
        self.subject.hint()
    }

    pub fn letters(&self) -> &LetterGrid {
        &self.letters
    }

    pub fn toggle_hint(&mut self) {
        self.hint_visible = !self.hint_visible;
    }

    /// Guess `letter` (case-insensitive).
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() || self.outcome() != RoundOutcome::InProgress {
            return GuessOutcome::Ignored;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::Ignored;
        }
        self.letters.hide(letter);

        if self.word.contains(letter) {
            tracing::debug!(%letter, "Correct guess");
            GuessOutcome::Hit
        } else {
            self.wrong_guesses = (self.wrong_guesses + 1).min(MAX_WRONG_GUESSES);
            tracing::debug!(%letter, wrong = self.wrong_guesses, "Wrong guess");
            GuessOutcome::Miss
        }
    }

    /// Guess the letter whose visible button is under `point`, if any.
    pub fn guess_at(&mut self, point: Vec2) -> Option<(char, GuessOutcome)> {
        let letter = self.letters.hit_test(point)?;
        Some((letter, self.guess(letter)))
    }

    /// Win is checked before loss.
    pub fn outcome(&self) -> RoundOutcome {
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            RoundOutcome::Won
        } else if self.wrong_guesses >= MAX_WRONG_GUESSES {
            RoundOutcome::Lost
        } else {
            RoundOutcome::InProgress
        }
    }

    /// The word with unguessed letters blanked, e.g. `"A _ O _ "`.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .flat_map(|c| {
                let shown = if self.guessed.contains(&c) { c } else { '_' };
                [shown, ' ']
            })
            .collect()
    }

    /// Start a fresh round in the same subject with a new random word.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.word = self.subject.random_word(rng);
        self.guessed.clear();
        self.wrong_guesses = 0;
        self.hint_visible = false;
        self.letters.show_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn atom() -> GameState {
        GameState::with_word(Subject::Science, "ATOM")
    }

    #[test]
    fn test_new_round_is_clean() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = GameState::new(Subject::English, &mut rng);

        assert!(Subject::English.words().contains(&state.word()));
        assert!(state.guessed().is_empty());
        assert_eq!(state.wrong_guesses(), 0);
        assert!(!state.hint_visible());
        assert_eq!(state.outcome(), RoundOutcome::InProgress);
    }

    #[test]
    fn test_hit_and_miss() {
        let mut state = atom();

        assert_eq!(state.guess('A'), GuessOutcome::Hit);
        assert_eq!(state.wrong_guesses(), 0);
        assert_eq!(state.guess('Z'), GuessOutcome::Miss);
        assert_eq!(state.wrong_guesses(), 1);
        assert!(!state.letters().is_visible('A'));
        assert!(!state.letters().is_visible('Z'));
    }

    #[test]
    fn test_repeat_guess_ignored() {
        let mut state = atom();

        state.guess('Q');
        assert_eq!(state.guess('Q'), GuessOutcome::Ignored);
        assert_eq!(state.guess('q'), GuessOutcome::Ignored);
        assert_eq!(state.wrong_guesses(), 1);
        assert_eq!(state.guessed().len(), 1);
    }

    #[test]
    fn test_lowercase_and_symbols() {
        let mut state = atom();
        assert_eq!(state.guess('t'), GuessOutcome::Hit);
        assert!(state.guessed().contains(&'T'));
        assert_eq!(state.guess('3'), GuessOutcome::Ignored);
        assert_eq!(state.guess('-'), GuessOutcome::Ignored);
    }

    #[test]
    fn test_win_when_all_letters_guessed() {
        let mut state = atom();
        for letter in ['M', 'O', 'T'] {
            state.guess(letter);
            assert_eq!(state.outcome(), RoundOutcome::InProgress);
        }
        state.guess('A');
        assert_eq!(state.outcome(), RoundOutcome::Won);
    }

    #[test]
    fn test_loss_after_six_misses() {
        let mut state = atom();
        for (i, letter) in ['B', 'C', 'D', 'E', 'F', 'G'].into_iter().enumerate() {
            assert_eq!(state.outcome(), RoundOutcome::InProgress);
            assert_eq!(state.guess(letter), GuessOutcome::Miss);
            assert_eq!(state.wrong_guesses() as usize, i + 1);
        }
        assert_eq!(state.outcome(), RoundOutcome::Lost);
        // Finished rounds take no more guesses
        assert_eq!(state.guess('H'), GuessOutcome::Ignored);
        assert_eq!(state.wrong_guesses(), MAX_WRONG_GUESSES);
    }

    #[test]
    fn test_masked_word() {
        let mut state = atom();
        assert_eq!(state.masked_word(), "_ _ _ _ ");
        state.guess('O');
        assert_eq!(state.masked_word(), "_ _ O _ ");
    }

    #[test]
    fn test_guess_at_uses_button_positions() {
        let mut state = atom();
        let t_center = state.letters().buttons()[(b'T' - b'A') as usize].position;

        assert_eq!(state.guess_at(t_center), Some(('T', GuessOutcome::Hit)));
        // Button is gone now
        assert_eq!(state.guess_at(t_center), None);
        assert_eq!(state.guess_at(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_hint_toggle() {
        let mut state = atom();
        state.toggle_hint();
        assert!(state.hint_visible());
        assert_eq!(state.hint(), "A Science term.");
        state.toggle_hint();
        assert!(!state.hint_visible());
    }

    #[test]
    fn test_reset_clears_transient_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut state = atom();
        state.guess('A');
        state.guess('X');
        state.toggle_hint();

        state.reset(&mut rng);

        assert_eq!(state.subject(), Subject::Science);
        assert!(Subject::Science.words().contains(&state.word()));
        assert!(state.guessed().is_empty());
        assert_eq!(state.wrong_guesses(), 0);
        assert!(!state.hint_visible());
        assert_eq!(state.letters().visible().count(), 26);
    }
}

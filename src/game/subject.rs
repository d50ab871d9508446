//! Word categories and their fixed word lists.

use rand::seq::SliceRandom;
use rand::Rng;

/// A word category the player picks before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Science,
    Geography,
    English,
}

impl Subject {
    /// All subjects, in menu order.
    pub const ALL: [Subject; 3] = [Subject::Science, Subject::Geography, Subject::English];

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Subject::Science => "Science",
            Subject::Geography => "Geography",
            Subject::English => "English",
        }
    }

    /// The fixed word list for this subject. All words are uppercase A-Z.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Subject::Science => &["GRAVITY", "PHOTOSYNTHESIS", "ATOM"],
            Subject::Geography => &["MOUNTAIN", "RIVER", "DESERT"],
            Subject::English => &["METAPHOR", "ALLITERATION", "SONNET"],
        }
    }

    /// Hint sentence shown in the hint popup, e.g. "An English term."
    pub fn hint(self) -> String {
        let label = self.label();
        let article = match label.chars().next() {
            Some('A' | 'E' | 'I' | 'O' | 'U') => "An",
            _ => "A",
        };
        format!("{article} {label} term.")
    }

    /// Pick a random word from this subject's list.
    pub fn random_word<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        // Lists are non-empty constants
        self.words().choose(rng).copied().unwrap_or_default()
    }
}

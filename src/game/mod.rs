//! Hangman game logic, independent of windowing and rendering.

pub mod layout;
pub mod letters;
pub mod session;
pub mod state;
pub mod subject;

pub use layout::{Bounds, Control};
pub use letters::{LetterButton, LetterGrid};
pub use session::{Banner, LoopAction, Phase, Session};
pub use state::{GameState, GuessOutcome, RoundOutcome, MAX_WRONG_GUESSES};
pub use subject::Subject;

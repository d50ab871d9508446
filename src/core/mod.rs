pub mod clock;
pub mod config;
pub mod error;

pub use clock::FrameClock;
pub use config::GameConfig;
pub use error::{HangmanError, Result};

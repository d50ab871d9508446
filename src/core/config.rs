//! Game configuration with documented defaults
//!
//! Every tunable number lives here. Values can be overridden by an
//! optional `hangman.toml` next to the executable's working directory;
//! missing keys keep their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::error::{HangmanError, Result};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "hangman.toml";

/// Configuration for the game window and loop
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === WINDOW ===
    /// Logical window width in pixels
    ///
    /// The screen layout is authored for 800x500; larger windows leave
    /// white margin, smaller ones clip the letter grid.
    pub window_width: u32,

    /// Logical window height in pixels
    pub window_height: u32,

    // === LOOP ===
    /// Fixed number of game ticks (and redraws) per second
    pub tick_rate: u32,

    // === ASSETS ===
    /// Directory holding `hangman0.png` .. `hangman6.png`
    ///
    /// If the directory or any image is missing, placeholder drawings
    /// are generated instead.
    pub asset_dir: PathBuf,

    // === ROUND END ===
    /// Pause with the final board still visible after a win or loss
    pub result_pause_ms: u64,

    /// How long the win/loss message stays on screen before the next round
    pub result_display_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 500,
            tick_rate: 60,
            asset_dir: PathBuf::from("hangman_images"),
            result_pause_ms: 1000,
            result_display_ms: 3000,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(HangmanError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        if !(1..=240).contains(&self.tick_rate) {
            return Err(HangmanError::InvalidConfig(format!(
                "tick_rate ({}) must be between 1 and 240",
                self.tick_rate
            )));
        }

        Ok(())
    }

    /// Duration of a single tick
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    pub fn result_pause(&self) -> Duration {
        Duration::from_millis(self.result_pause_ms)
    }

    pub fn result_display(&self) -> Duration {
        Duration::from_millis(self.result_display_ms)
    }
}

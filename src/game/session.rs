//! The game's phase machine: subject menu, play, and the timed
//! win/loss announcement between rounds.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::game::layout::{self, Control};
use crate::game::state::{GameState, RoundOutcome};
use crate::game::subject::Subject;

/// What the event loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Quit,
}

/// Message shown when a round ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub outcome: RoundOutcome,
    pub message: String,
}

impl Banner {
    fn for_round(state: &GameState, outcome: RoundOutcome) -> Self {
        let message = match outcome {
            RoundOutcome::Won => "You WON!".to_string(),
            _ => format!("You LOST! Word: {}", state.word()),
        };
        Self { outcome, message }
    }
}

/// Current phase of the session.
#[derive(Debug, Clone)]
pub enum Phase {
    /// No subject chosen yet.
    SelectingSubject,
    Playing(GameState),
    /// A round just ended. The final board stays up for the pause, then
    /// the banner is shown alone until the display time runs out.
    Announcing {
        state: GameState,
        banner: Banner,
        elapsed: Duration,
    },
}

/// Owns all game state and advances it from input and ticks.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    result_pause: Duration,
    result_display: Duration,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::SelectingSubject,
            result_pause: config.result_pause(),
            result_display: config.result_display(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The round on screen, if a subject has been chosen.
    pub fn state(&self) -> Option<&GameState> {
        match &self.phase {
            Phase::SelectingSubject => None,
            Phase::Playing(state) | Phase::Announcing { state, .. } => Some(state),
        }
    }

    pub fn subject_selected(&self) -> bool {
        !matches!(self.phase, Phase::SelectingSubject)
    }

    /// The banner to draw instead of the board, once the pause is over.
    pub fn visible_banner(&self) -> Option<&Banner> {
        match &self.phase {
            Phase::Announcing {
                banner, elapsed, ..
            } if *elapsed >= self.result_pause => Some(banner),
            _ => None,
        }
    }

    /// Choose a subject and start the first round. Ignored once a subject
    /// is already chosen.
    pub fn select_subject<R: Rng + ?Sized>(&mut self, subject: Subject, rng: &mut R) {
        if self.subject_selected() {
            return;
        }
        let state = GameState::new(subject, rng);
        tracing::info!(subject = subject.label(), "Subject selected");
        self.phase = Phase::Playing(state);
    }

    /// Handle a left click at `point` (logical pixels).
    pub fn click<R: Rng + ?Sized>(&mut self, point: Vec2, rng: &mut R) -> LoopAction {
        if !self.subject_selected() {
            if let Some(subject) = layout::subject_at(point) {
                self.select_subject(subject, rng);
            }
            return LoopAction::Continue;
        }

        match &mut self.phase {
            Phase::SelectingSubject => {}
            Phase::Playing(state) => {
                for control in layout::controls_at(point) {
                    match control {
                        Control::Hint => state.toggle_hint(),
                        Control::Quit => return LoopAction::Quit,
                        Control::Restart => {
                            tracing::info!("Round restarted");
                            state.reset(rng);
                        }
                    }
                }
                state.guess_at(point);
            }
            Phase::Announcing { .. } => {}
        }
        LoopAction::Continue
    }

    /// Advance timers by `dt` and evaluate the round outcome.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R) {
        let phase = std::mem::replace(&mut self.phase, Phase::SelectingSubject);
        self.phase = match phase {
            Phase::Playing(state) => match state.outcome() {
                RoundOutcome::InProgress => Phase::Playing(state),
                outcome => {
                    let banner = Banner::for_round(&state, outcome);
                    tracing::info!(word = state.word(), "{}", banner.message);
                    Phase::Announcing {
                        state,
                        banner,
                        elapsed: Duration::ZERO,
                    }
                }
            },
            Phase::Announcing {
                mut state,
                banner,
                elapsed,
            } => {
                let elapsed = elapsed + dt;
                if elapsed >= self.result_pause + self.result_display {
                    state.reset(rng);
                    tracing::info!("New round started");
                    Phase::Playing(state)
                } else {
                    Phase::Announcing {
                        state,
                        banner,
                        elapsed,
                    }
                }
            }
            Phase::SelectingSubject => Phase::SelectingSubject,
        };
    }
}

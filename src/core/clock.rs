//! Fixed-rate frame pacing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of tick intervals kept for the frame-rate average.
const SAMPLE_WINDOW: usize = 120;

/// Paces the game loop at a fixed tick rate and tracks the actual rate.
///
/// The event loop sleeps until [`FrameClock::deadline`], then calls
/// [`FrameClock::advance`] to get the elapsed time since the previous tick.
pub struct FrameClock {
    period: Duration,
    last_tick: Instant,
    deadline: Instant,
    intervals: VecDeque<Duration>,
}

impl FrameClock {
    /// Create a clock whose first tick is due one period after `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last_tick: start,
            deadline: start + period,
            intervals: VecDeque::with_capacity(SAMPLE_WINDOW),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether a tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Record a tick at `now` and schedule the next one.
    ///
    /// Returns the time elapsed since the previous tick. If the loop fell
    /// more than a period behind, the schedule restarts from `now` instead
    /// of bursting to catch up.
    pub fn advance(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        self.intervals.push_back(elapsed);
        if self.intervals.len() > SAMPLE_WINDOW {
            self.intervals.pop_front();
        }

        self.deadline += self.period;
        if self.deadline <= now {
            self.deadline = now + self.period;
        }

        elapsed
    }

    /// Average tick interval in milliseconds (over the sample window).
    pub fn avg_interval_ms(&self) -> f32 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.intervals.iter().sum();
        sum.as_secs_f32() * 1000.0 / self.intervals.len() as f32
    }

    /// Measured ticks per second.
    pub fn fps(&self) -> f32 {
        let ms = self.avg_interval_ms();
        if ms > 0.0 {
            1000.0 / ms
        } else {
            0.0
        }
    }
}

//! Per-turn countdown
//!
//! The timer never reads the clock itself; callers pass `now` so that the
//! session logic can be driven deterministically.

use std::time::{Duration, Instant};

/// Colour band of the remaining time, as shown by the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerBand {
    Green,
    Gold,
    Red,
}

/// What the timer asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Running,
    HintDue,
    Expired,
}

#[derive(Debug, Clone)]
pub struct TurnTimer {
    hint_after: Duration,
    skip_after: Duration,
    started_at: Instant,
}

impl TurnTimer {
    pub fn new(hint_after: Duration, skip_after: Duration, now: Instant) -> Self {
        Self {
            hint_after,
            skip_after,
            started_at: now,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.started_at = now;
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.skip_after.saturating_sub(self.elapsed(now))
    }

    /// Remaining time as a fraction of the full turn, in [0, 1]
    pub fn fraction_remaining(&self, now: Instant) -> f64 {
        if self.skip_after.is_zero() {
            return 0.0;
        }
        self.remaining(now).as_secs_f64() / self.skip_after.as_secs_f64()
    }

    pub fn band(&self, now: Instant) -> TimerBand {
        let fraction = self.fraction_remaining(now);
        if fraction < 0.2 {
            TimerBand::Red
        } else if fraction < 0.5 {
            TimerBand::Gold
        } else {
            TimerBand::Green
        }
    }

    pub fn phase(&self, now: Instant) -> TimerPhase {
        let elapsed = self.elapsed(now);
        if elapsed >= self.skip_after {
            TimerPhase::Expired
        } else if elapsed >= self.hint_after {
            TimerPhase::HintDue
        } else {
            TimerPhase::Running
        }
    }
}

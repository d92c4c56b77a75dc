use serde::Serialize;
use strum_macros::Display;

use super::RoundDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ClockState {
    Idle,
    Running,
    Expired,
}

/// What a single tick did to the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSignal {
    /// The clock was not running; nothing changed
    Ignored,
    /// One second elapsed and time remains
    Tick { remaining: u32 },
    /// Time ran out on this tick. Emitted once per start.
    Expired,
}

/// Whole-second countdown for a single round.
///
/// The clock never reads wall time itself; whoever owns it calls `tick` once per elapsed
/// second. Ticks outside `Running` are ignored, so a late pulse can never drive the
/// remaining time below zero or expire the same round twice.
#[derive(Debug, Clone)]
pub struct SessionClock {
    duration: RoundDuration,
    remaining: u32,
    state: ClockState,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(RoundDuration::default())
    }
}

impl SessionClock {
    pub fn new(duration: RoundDuration) -> Self {
        Self {
            duration,
            remaining: duration.seconds(),
            state: ClockState::Idle,
        }
    }

    /// Resets the remaining time to `duration` and starts counting
    pub fn start(&mut self, duration: RoundDuration) {
        self.duration = duration;
        self.remaining = duration.seconds();
        self.state = ClockState::Running;
    }

    pub fn tick(&mut self) -> ClockSignal {
        if self.state != ClockState::Running {
            return ClockSignal::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = ClockState::Expired;
            ClockSignal::Expired
        } else {
            ClockSignal::Tick {
                remaining: self.remaining,
            }
        }
    }

    /// Stops the clock without expiring it. Remaining time is left where it was.
    pub fn cancel(&mut self) {
        self.state = ClockState::Idle;
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn duration(&self) -> RoundDuration {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Share of the round still left, 0..=100
    pub fn progress_percent(&self) -> u32 {
        let total = self.duration.seconds();
        if total == 0 {
            return 0;
        }
        ((self.remaining as f64 / total as f64) * 100.0).round() as u32
    }
}

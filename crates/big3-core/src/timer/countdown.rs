//! Tick-based countdown.
//!
//! Remaining time is kept in integer milliseconds so repeated ticks never
//! accumulate rounding error. The countdown fires once when the remaining
//! time is within one tick of zero, then goes inert.

use serde::{Deserialize, Serialize};

/// Default tick granularity.
pub const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused, finished, or still counting.
    Idle,
    /// Remaining time reached zero on this tick.
    Elapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_ms: u64,
    tick_ms: u64,
    paused: bool,
    finished: bool,
}

impl Countdown {
    pub fn new(duration_ms: u64) -> Self {
        Self::with_tick(duration_ms, DEFAULT_TICK_MS)
    }

    /// A zero `tick_ms` is bumped to 1 ms.
    pub fn with_tick(duration_ms: u64, tick_ms: u64) -> Self {
        Self {
            remaining_ms: duration_ms,
            tick_ms: tick_ms.max(1),
            paused: false,
            finished: false,
        }
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.advance_by(self.tick_ms)
    }

    /// Advance by an arbitrary wall-clock delta.
    pub fn advance_by(&mut self, elapsed_ms: u64) -> TickOutcome {
        if self.paused || self.finished {
            return TickOutcome::Idle;
        }
        if self.remaining_ms <= elapsed_ms.max(self.tick_ms) {
            // Within one tick of zero: finish now rather than overshoot.
            self.remaining_ms = 0;
            self.finished = true;
            return TickOutcome::Elapsed;
        }
        self.remaining_ms -= elapsed_ms;
        TickOutcome::Idle
    }
}

//! Phase clocks: what a session arms when it enters a timed phase.
//!
//! [`ManualClock`] is stepped by the caller and suits tests and simulated
//! runs. [`TaskClock`] runs a [`CountdownTask`] per phase on tokio and
//! reports through a channel.

use tokio::sync::mpsc;

use super::countdown::{Countdown, TickOutcome, DEFAULT_TICK_MS};
use super::task::{CountdownTask, TickEvent};

pub trait PhaseClock {
    /// Replace whatever is running with a fresh countdown.
    fn arm(&mut self, duration_ms: u64, paused: bool);

    /// Tear down the current countdown, if any.
    fn disarm(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    fn is_armed(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct ManualClock {
    countdown: Option<Countdown>,
    tick_ms: Option<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick(tick_ms: u64) -> Self {
        Self {
            countdown: None,
            tick_ms: Some(tick_ms),
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.countdown
            .as_mut()
            .map(Countdown::tick)
            .unwrap_or(TickOutcome::Idle)
    }

    pub fn advance_by(&mut self, elapsed_ms: u64) -> TickOutcome {
        self.countdown
            .as_mut()
            .map(|c| c.advance_by(elapsed_ms))
            .unwrap_or(TickOutcome::Idle)
    }

    pub fn remaining_ms(&self) -> Option<u64> {
        self.countdown.as_ref().map(Countdown::remaining_ms)
    }
}

impl PhaseClock for ManualClock {
    fn arm(&mut self, duration_ms: u64, paused: bool) {
        let mut countdown =
            Countdown::with_tick(duration_ms, self.tick_ms.unwrap_or(DEFAULT_TICK_MS));
        if paused {
            countdown.pause();
        }
        self.countdown = Some(countdown);
    }

    fn disarm(&mut self) {
        self.countdown = None;
    }

    fn pause(&mut self) {
        if let Some(c) = self.countdown.as_mut() {
            c.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(c) = self.countdown.as_mut() {
            c.resume();
        }
    }

    fn is_armed(&self) -> bool {
        self.countdown.is_some()
    }
}

#[derive(Debug)]
pub struct TaskClock {
    tick_ms: u64,
    generation: u64,
    task: Option<CountdownTask>,
    events: mpsc::UnboundedSender<TickEvent>,
}

impl TaskClock {
    pub fn new(tick_ms: u64, events: mpsc::UnboundedSender<TickEvent>) -> Self {
        Self {
            tick_ms,
            generation: 0,
            task: None,
            events,
        }
    }

    /// Generation of the running task; events from older ones are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, event: &TickEvent) -> bool {
        self.task.is_some() && event.generation() == self.generation
    }
}

impl PhaseClock for TaskClock {
    fn arm(&mut self, duration_ms: u64, paused: bool) {
        self.disarm();
        self.generation += 1;
        self.task = Some(CountdownTask::spawn(
            self.generation,
            duration_ms,
            self.tick_ms,
            paused,
            self.events.clone(),
        ));
    }

    fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    fn pause(&mut self) {
        if let Some(task) = &self.task {
            task.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(task) = &self.task {
            task.resume();
        }
    }

    fn is_armed(&self) -> bool {
        self.task.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_rearm_replaces_countdown() {
        let mut clock = ManualClock::new();
        clock.arm(1_000, false);
        clock.tick();
        assert_eq!(clock.remaining_ms(), Some(900));
        clock.arm(3_000, true);
        assert_eq!(clock.tick(), TickOutcome::Idle);
        assert_eq!(clock.remaining_ms(), Some(3_000));
        clock.disarm();
        assert!(!clock.is_armed());
        assert_eq!(clock.tick(), TickOutcome::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn task_clock_discards_stale_generations() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = TaskClock::new(100, tx);
        clock.arm(1_000, false);
        let first = clock.generation();
        clock.arm(200, false);
        assert_ne!(first, clock.generation());

        let event = rx.recv().await.unwrap();
        assert!(clock.is_current(&event));
        assert!(!clock.is_current(&TickEvent::Elapsed { generation: first }));

        clock.disarm();
        assert!(!clock.is_current(&event));
    }
}

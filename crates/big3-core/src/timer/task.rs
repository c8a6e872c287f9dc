//! Cancellable countdown task on the tokio runtime.
//!
//! One task drives one phase. The owner recreates it on every phase change
//! and drops it on stop; dropping aborts the task, so no tick can land in a
//! session that has moved on. Each task is tagged with a generation so the
//! receiver can also discard anything already queued by an older task.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::countdown::{Countdown, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Tick { generation: u64, remaining_ms: u64 },
    Elapsed { generation: u64 },
}

impl TickEvent {
    pub fn generation(&self) -> u64 {
        match self {
            TickEvent::Tick { generation, .. } | TickEvent::Elapsed { generation } => *generation,
        }
    }
}

#[derive(Debug)]
pub struct CountdownTask {
    generation: u64,
    paused: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl CountdownTask {
    /// Spawn a countdown of `duration_ms`, ticking every `tick_ms`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        generation: u64,
        duration_ms: u64,
        tick_ms: u64,
        start_paused: bool,
        events: mpsc::UnboundedSender<TickEvent>,
    ) -> Self {
        let (paused, mut paused_rx) = watch::channel(start_paused);
        let handle = tokio::spawn(async move {
            let mut countdown = Countdown::with_tick(duration_ms, tick_ms);
            let mut interval = tokio::time::interval(Duration::from_millis(countdown.tick_ms()));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of an interval completes immediately.
            interval.tick().await;

            loop {
                let is_paused = *paused_rx.borrow_and_update();
                if is_paused {
                    if paused_rx.changed().await.is_err() {
                        return;
                    }
                    interval.reset();
                    continue;
                }

                tokio::select! {
                    _ = interval.tick() => {
                        let event = match countdown.tick() {
                            TickOutcome::Elapsed => TickEvent::Elapsed { generation },
                            TickOutcome::Idle => TickEvent::Tick {
                                generation,
                                remaining_ms: countdown.remaining_ms(),
                            },
                        };
                        let done = matches!(event, TickEvent::Elapsed { .. });
                        if events.send(event).is_err() || done {
                            return;
                        }
                    }
                    changed = paused_rx.changed() => {
                        if changed.is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Self {
            generation,
            paused,
            handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pause(&self) {
        self.paused.send_replace(true);
    }

    pub fn resume(&self) {
        self.paused.send_replace(false);
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

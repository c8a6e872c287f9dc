//! A running workout: sequencer, phase clock and cue dispatcher together.
//!
//! The session is the only writer of the sequencer state. After every
//! transition it re-arms the clock for the new phase (or tears it down for
//! idle, rest and complete) and forwards cue events to the dispatcher.

use crate::audio::CueDispatcher;
use crate::error::SequencerError;
use crate::events::Event;
use crate::timer::{ManualClock, PhaseClock, TaskClock, TickEvent, TickOutcome};
use crate::workout::{Command, SessionState, WorkoutSequencer};

pub struct WorkoutSession<C: PhaseClock> {
    sequencer: WorkoutSequencer,
    clock: C,
    cues: Box<dyn CueDispatcher>,
}

impl<C: PhaseClock> WorkoutSession<C> {
    pub fn new(sequencer: WorkoutSequencer, clock: C, cues: Box<dyn CueDispatcher>) -> Self {
        Self {
            sequencer,
            clock,
            cues,
        }
    }

    pub fn sequencer(&self) -> &WorkoutSequencer {
        &self.sequencer
    }

    pub fn state(&self) -> &SessionState {
        self.sequencer.state()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run a user or driver command.
    ///
    /// # Errors
    ///
    /// Propagates a rejected `Start`/`JumpTo` position; nothing changes in
    /// that case.
    pub fn handle(&mut self, command: Command) -> Result<Vec<Event>, SequencerError> {
        let events = self.sequencer.apply(command)?;
        self.react(&events);
        Ok(events)
    }

    fn on_elapsed(&mut self) -> Vec<Event> {
        let events = self.sequencer.advance_phase();
        self.react(&events);
        events
    }

    fn react(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::WorkoutStarted {
                    set_index,
                    exercise_index,
                } => {
                    tracing::info!(set_index, exercise_index, "workout started");
                    self.cues.on_session_start();
                }
                Event::PhaseChanged { to, duration_ms, .. } => {
                    if to.is_timed() {
                        self.clock.arm(*duration_ms, self.sequencer.state().is_paused);
                    } else {
                        self.clock.disarm();
                    }
                }
                Event::Cue { cue } => self.cues.dispatch(*cue),
                Event::Paused { .. } => self.clock.pause(),
                Event::Resumed { .. } => self.clock.resume(),
                Event::Stopped => {
                    tracing::info!("workout stopped");
                    self.clock.disarm();
                    self.cues.on_session_stop();
                }
                Event::WorkoutCompleted => {
                    tracing::info!("workout complete");
                    self.clock.disarm();
                    self.cues.on_session_stop();
                }
            }
        }
    }
}

impl WorkoutSession<ManualClock> {
    /// Advance the clock by one tick; advances the phase when it elapses.
    pub fn tick(&mut self) -> Vec<Event> {
        let outcome = self.clock.tick();
        self.after_manual_tick(outcome)
    }

    /// Advance the clock by a wall-clock delta.
    pub fn advance_by(&mut self, elapsed_ms: u64) -> Vec<Event> {
        let outcome = self.clock.advance_by(elapsed_ms);
        self.after_manual_tick(outcome)
    }

    fn after_manual_tick(&mut self, outcome: TickOutcome) -> Vec<Event> {
        match outcome {
            TickOutcome::Elapsed => self.on_elapsed(),
            TickOutcome::Idle => {
                if let Some(remaining) = self.clock.remaining_ms() {
                    self.sequencer.sync_time_remaining(remaining);
                }
                Vec::new()
            }
        }
    }
}

impl WorkoutSession<TaskClock> {
    /// Feed one event from the countdown task channel. Events from a task
    /// that has since been replaced or torn down are dropped.
    pub fn on_tick_event(&mut self, event: TickEvent) -> Vec<Event> {
        if !self.clock.is_current(&event) {
            tracing::trace!(?event, "stale tick dropped");
            return Vec::new();
        }
        match event {
            TickEvent::Tick { remaining_ms, .. } => {
                self.sequencer.sync_time_remaining(remaining_ms);
                Vec::new()
            }
            TickEvent::Elapsed { .. } => {
                self.sequencer.sync_time_remaining(0);
                self.on_elapsed()
            }
        }
    }
}

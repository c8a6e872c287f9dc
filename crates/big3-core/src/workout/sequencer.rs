//! Owner of one plan and its session state.
//!
//! `WorkoutSequencer` is a thin stateful wrapper around [`reduce`]: each
//! operation runs the reducer and keeps the resulting state.
//!
//! ```ignore
//! let mut seq = WorkoutSequencer::new(&config)?;
//! seq.start(0, 0)?;
//! // countdown reaches zero:
//! let events = seq.advance_phase();
//! ```

use super::config::{Exercise, WorkoutConfig};
use super::plan::Plan;
use super::reducer::{reduce, Command};
use super::state::{Phase, SessionState};
use crate::error::{SequencerError, ValidationError};
use crate::events::Event;

#[derive(Debug, Clone)]
pub struct WorkoutSequencer {
    plan: Plan,
    state: SessionState,
}

impl WorkoutSequencer {
    /// # Errors
    ///
    /// Returns a validation error if the configuration breaks an invariant.
    pub fn new(config: &WorkoutConfig) -> Result<Self, ValidationError> {
        Ok(Self::from_plan(Plan::new(config)?))
    }

    pub fn from_plan(plan: Plan) -> Self {
        Self {
            plan,
            state: SessionState::idle(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.plan.exercise(self.state.exercise_index)
    }

    pub fn current_set_reps(&self) -> usize {
        self.plan.reps_in_set(self.state.set_index)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Run any command through the reducer.
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfRange` for `Start`/`JumpTo` outside the plan;
    /// the state is left untouched in that case.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Event>, SequencerError> {
        let transition = reduce(&self.plan, &self.state, command)?;
        if !transition.is_noop() {
            tracing::debug!(?command, from = %self.state.phase, to = %transition.state.phase, "sequencer transition");
        }
        self.state = transition.state;
        Ok(transition.events)
    }

    /// # Errors
    ///
    /// Rejects positions outside the plan.
    pub fn start(&mut self, set: usize, exercise: usize) -> Result<Vec<Event>, SequencerError> {
        self.apply(Command::Start { set, exercise })
    }

    /// # Errors
    ///
    /// Rejects positions outside the plan.
    pub fn skip_to_position(
        &mut self,
        set: usize,
        exercise: usize,
    ) -> Result<Vec<Event>, SequencerError> {
        self.apply(Command::JumpTo { set, exercise })
    }

    pub fn pause(&mut self) -> Vec<Event> {
        self.apply_infallible(Command::Pause)
    }

    pub fn resume(&mut self) -> Vec<Event> {
        self.apply_infallible(Command::Resume)
    }

    pub fn stop(&mut self) -> Vec<Event> {
        self.apply_infallible(Command::Stop)
    }

    pub fn advance_phase(&mut self) -> Vec<Event> {
        self.apply_infallible(Command::Advance)
    }

    pub fn skip(&mut self) -> Vec<Event> {
        self.apply_infallible(Command::Skip)
    }

    pub fn continue_from_rest(&mut self) -> Vec<Event> {
        self.apply_infallible(Command::Continue)
    }

    /// Mirror the countdown driver's remaining time into the session state.
    /// Ignored outside timed phases.
    pub fn sync_time_remaining(&mut self, remaining_ms: u64) {
        if self.state.phase.is_timed() {
            self.state.time_remaining_ms = remaining_ms;
        }
    }

    fn apply_infallible(&mut self, command: Command) -> Vec<Event> {
        // Only Start/JumpTo can fail.
        self.apply(command).unwrap_or_default()
    }
}

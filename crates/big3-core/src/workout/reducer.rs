//! Phase transition function.
//!
//! `reduce` takes the plan, the current session state and a command, and
//! returns the next state plus the events the transition produced. It does
//! no I/O and never mutates its inputs, so any driver (terminal loop, test,
//! GUI) can own the state however it likes.
//!
//! ## Phase flow
//!
//! ```text
//! Idle -> Countdown -> Hold -> Pause -> Hold ... -> Rest -> Countdown ... -> Complete
//! ```
//!
//! Commands that make no sense in the current phase return the state
//! unchanged with no events.

use serde::{Deserialize, Serialize};

use super::plan::Plan;
use super::state::{Phase, SessionState};
use crate::error::SequencerError;
use crate::events::{Cue, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Start { set: usize, exercise: usize },
    Pause,
    Resume,
    TogglePause,
    Stop,
    /// Leave the current phase as if its countdown had reached zero.
    Advance,
    /// User skip; only honoured while a timed phase is in progress.
    Skip,
    /// Leave rest.
    Continue,
    JumpTo { set: usize, exercise: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub events: Vec<Event>,
}

impl Transition {
    fn unchanged(state: &SessionState) -> Self {
        Self {
            state: *state,
            events: Vec::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Apply `command` to `state`.
///
/// # Errors
///
/// Returns `PositionOutOfRange` when `Start`/`JumpTo` name a set or
/// exercise outside the plan.
pub fn reduce(
    plan: &Plan,
    state: &SessionState,
    command: Command,
) -> Result<Transition, SequencerError> {
    let transition = match command {
        Command::Start { set, exercise } | Command::JumpTo { set, exercise } => {
            begin_at(plan, state, set, exercise)?
        }
        Command::Pause => pause(state),
        Command::Resume => resume(state),
        Command::TogglePause if state.is_paused => resume(state),
        Command::TogglePause => pause(state),
        Command::Stop => stop(state),
        Command::Advance => advance(plan, state),
        Command::Skip if state.is_interruptible() => advance(plan, state),
        Command::Skip => Transition::unchanged(state),
        Command::Continue if state.phase == Phase::Rest => advance(plan, state),
        Command::Continue => Transition::unchanged(state),
    };
    Ok(transition)
}

fn begin_at(
    plan: &Plan,
    state: &SessionState,
    set: usize,
    exercise: usize,
) -> Result<Transition, SequencerError> {
    if !plan.contains(set, exercise) {
        return Err(SequencerError::PositionOutOfRange {
            set,
            exercise,
            sets: plan.total_sets(),
            exercises: plan.total_exercises(),
        });
    }

    let duration_ms = plan.duration_ms(Phase::Countdown);
    let next = SessionState {
        phase: Phase::Countdown,
        set_index: set,
        exercise_index: exercise,
        rep_index: 0,
        time_remaining_ms: duration_ms,
        is_active: true,
        is_paused: false,
    };

    let mut events = Vec::with_capacity(2);
    if !state.is_active {
        events.push(Event::WorkoutStarted {
            set_index: set,
            exercise_index: exercise,
        });
    }
    events.push(phase_changed(state.phase, &next));
    Ok(Transition {
        state: next,
        events,
    })
}

fn pause(state: &SessionState) -> Transition {
    if !state.is_interruptible() || state.is_paused {
        return Transition::unchanged(state);
    }
    let next = SessionState {
        is_paused: true,
        ..*state
    };
    Transition {
        state: next,
        events: vec![Event::Paused {
            remaining_ms: next.time_remaining_ms,
        }],
    }
}

fn resume(state: &SessionState) -> Transition {
    if !state.is_interruptible() || !state.is_paused {
        return Transition::unchanged(state);
    }
    let next = SessionState {
        is_paused: false,
        ..*state
    };
    Transition {
        state: next,
        events: vec![Event::Resumed {
            remaining_ms: next.time_remaining_ms,
        }],
    }
}

fn stop(state: &SessionState) -> Transition {
    let next = SessionState {
        phase: Phase::Idle,
        time_remaining_ms: 0,
        is_active: false,
        is_paused: false,
        ..*state
    };
    Transition {
        state: next,
        events: vec![Event::Stopped],
    }
}

fn advance(plan: &Plan, state: &SessionState) -> Transition {
    let mut next = *state;
    let mut events = Vec::with_capacity(3);

    match state.phase {
        Phase::Idle | Phase::Complete => return Transition::unchanged(state),
        Phase::Countdown => enter(plan, &mut next, Phase::Hold),
        Phase::Pause => {
            events.push(Event::Cue {
                cue: Cue::PauseComplete,
            });
            // Straight back into a hold; no countdown between reps.
            enter(plan, &mut next, Phase::Hold);
        }
        Phase::Rest => enter(plan, &mut next, Phase::Countdown),
        Phase::Hold => {
            let reps = plan.reps_in_set(state.set_index);
            if state.rep_index + 1 < reps {
                events.push(Event::Cue {
                    cue: Cue::HoldComplete,
                });
                next.rep_index += 1;
                enter(plan, &mut next, Phase::Pause);
            } else if state.exercise_index + 1 < plan.total_exercises() {
                next.exercise_index += 1;
                next.rep_index = 0;
                enter_rest(plan, &mut next, &mut events);
            } else if state.set_index + 1 < plan.total_sets() {
                next.set_index += 1;
                next.exercise_index = 0;
                next.rep_index = 0;
                enter_rest(plan, &mut next, &mut events);
            } else {
                enter(plan, &mut next, Phase::Complete);
                next.is_active = false;
                next.is_paused = false;
                events.push(phase_changed(state.phase, &next));
                events.push(Event::WorkoutCompleted);
                return Transition {
                    state: next,
                    events,
                };
            }
        }
    }

    events.push(phase_changed(state.phase, &next));
    Transition {
        state: next,
        events,
    }
}

fn enter(plan: &Plan, state: &mut SessionState, phase: Phase) {
    state.phase = phase;
    state.time_remaining_ms = plan.duration_ms(phase);
}

fn enter_rest(plan: &Plan, state: &mut SessionState, events: &mut Vec<Event>) {
    enter(plan, state, Phase::Rest);
    // Rest has no clock to freeze.
    state.is_paused = false;
    events.push(Event::Cue {
        cue: Cue::SetComplete,
    });
}

fn phase_changed(from: Phase, next: &SessionState) -> Event {
    Event::PhaseChanged {
        from,
        to: next.phase,
        set_index: next.set_index,
        exercise_index: next.exercise_index,
        rep_index: next.rep_index,
        duration_ms: next.time_remaining_ms,
    }
}

use serde::{Deserialize, Serialize};

use crate::workout::Phase;

/// Audio/speech signal fired on specific phase exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// A hold ended and another rep of the same set follows.
    HoldComplete,
    /// A between-rep pause ended, natural timeout or skip alike.
    PauseComplete,
    /// An exercise or set boundary was crossed; emitted on entering rest.
    SetComplete,
}

/// Every state change in the sequencer produces one or more events.
///
/// Events carry no timestamps so that the reducer stays deterministic;
/// consumers stamp them when they log or render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    WorkoutStarted {
        set_index: usize,
        exercise_index: usize,
    },
    PhaseChanged {
        from: Phase,
        to: Phase,
        set_index: usize,
        exercise_index: usize,
        rep_index: usize,
        duration_ms: u64,
    },
    Cue {
        cue: Cue,
    },
    Paused {
        remaining_ms: u64,
    },
    Resumed {
        remaining_ms: u64,
    },
    Stopped,
    WorkoutCompleted,
}

impl Event {
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Event::Cue { cue } => Some(*cue),
            _ => None,
        }
    }

    /// The phase entered, for `PhaseChanged` events.
    pub fn entered_phase(&self) -> Option<Phase> {
        match self {
            Event::PhaseChanged { to, .. } => Some(*to),
            _ => None,
        }
    }
}

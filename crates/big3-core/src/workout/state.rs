use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Countdown,
    Hold,
    Pause,
    /// Untimed gate between exercises or sets. Only an explicit user action
    /// leaves it.
    Rest,
    Complete,
}

impl Phase {
    /// Phases driven by a countdown.
    pub fn is_timed(self) -> bool {
        matches!(self, Phase::Countdown | Phase::Hold | Phase::Pause)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Countdown => "countdown",
            Phase::Hold => "hold",
            Phase::Pause => "pause",
            Phase::Rest => "rest",
            Phase::Complete => "complete",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ephemeral state of one workout session.
///
/// `set_index`, `exercise_index` and `rep_index` always point inside the
/// plan the state was produced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub set_index: usize,
    pub exercise_index: usize,
    pub rep_index: usize,
    /// Milliseconds left in the current timed phase; zero otherwise.
    pub time_remaining_ms: u64,
    pub is_active: bool,
    pub is_paused: bool,
}

impl SessionState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Whether pause/resume/skip are meaningful right now.
    pub fn is_interruptible(&self) -> bool {
        self.is_active && !matches!(self.phase, Phase::Rest | Phase::Complete)
    }

    /// Whether a countdown should be ticking.
    pub fn is_running(&self) -> bool {
        self.is_active && !self.is_paused && self.phase.is_timed()
    }
}

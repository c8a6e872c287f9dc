mod config;
mod plan;
pub mod progress;
mod reducer;
mod sequencer;
mod state;

pub use config::{AudioPreference, Direction, Exercise, Preset, Theme, WorkoutConfig};
pub use plan::Plan;
pub use progress::{CompletionSummary, ProgressEntry};
pub use reducer::{reduce, Command, Transition};
pub use sequencer::WorkoutSequencer;
pub use state::{Phase, SessionState};

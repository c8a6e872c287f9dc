//! # Big3 Timer Core Library
//!
//! Business logic for the Big3 interval workout timer: a pyramid of sets,
//! each rep a timed hold followed by a timed pause, with untimed rests
//! between exercises. The CLI and the HTTP server are thin layers over
//! this crate.
//!
//! ## Architecture
//!
//! - **Sequencer**: a pure reducer over (plan, session state, command) with
//!   a small stateful owner, [`WorkoutSequencer`]
//! - **Timer**: integer-millisecond [`Countdown`] plus a cancellable tokio
//!   [`CountdownTask`], wrapped behind the [`PhaseClock`] trait
//! - **Session**: [`WorkoutSession`] glues sequencer, clock and cues
//! - **Audio**: [`AudioEngine`] renders cues into tones or announcements
//! - **Storage**: TOML configuration merged over defaults
//! - **Catalog**: exercise descriptions and videos by id

pub mod audio;
pub mod catalog;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod timer;
pub mod workout;

pub use audio::{AudioEngine, CueDispatcher, CuePlan, CueSink};
pub use catalog::{Catalog, ExerciseDetails, Video};
pub use error::{CatalogError, ConfigError, CoreError, Result, SequencerError, ValidationError};
pub use events::{Cue, Event};
pub use session::WorkoutSession;
pub use storage::ConfigStore;
pub use timer::{Countdown, CountdownTask, ManualClock, PhaseClock, TaskClock, TickEvent};
pub use workout::{
    Command, Exercise, Phase, Plan, SessionState, WorkoutConfig, WorkoutSequencer,
};

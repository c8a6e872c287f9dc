mod clock;
mod countdown;
mod task;

pub use clock::{ManualClock, PhaseClock, TaskClock};
pub use countdown::{Countdown, TickOutcome, DEFAULT_TICK_MS};
pub use task::{CountdownTask, TickEvent};

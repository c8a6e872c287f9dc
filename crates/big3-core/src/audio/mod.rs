mod engine;

pub use engine::{plan_for, AudioEngine, CueDispatcher, CuePlan, CueSink, Tone, MIN_CUE_INTERVAL};

//! Integration tests for a session driven by the tokio countdown task.

use std::sync::{Arc, Mutex};

use big3_core::audio::{AudioEngine, CuePlan, CueSink};
use big3_core::timer::DEFAULT_TICK_MS;
use big3_core::workout::AudioPreference;
use big3_core::{Command, Exercise, Phase, TaskClock, WorkoutConfig, WorkoutSequencer, WorkoutSession};
use tokio::sync::mpsc;

#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<CuePlan>>>);

impl CueSink for SharedSink {
    fn play(&mut self, plan: &CuePlan) {
        self.0.lock().unwrap().push(plan.clone());
    }
}

fn config() -> WorkoutConfig {
    WorkoutConfig {
        exercises: vec![Exercise::new("a", "A"), Exercise::new("b", "B")],
        pyramid: vec![1],
        hold_duration: 1,
        pause_duration: 1,
        countdown_duration: 1,
        audio_preference: AudioPreference::Announce,
        ..WorkoutConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_task_driven_run_reaches_complete() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink = SharedSink::default();
    let engine = AudioEngine::new(AudioPreference::Announce, 0.7, sink.clone());
    let mut session = WorkoutSession::new(
        WorkoutSequencer::new(&config()).unwrap(),
        TaskClock::new(DEFAULT_TICK_MS, tx),
        Box::new(engine),
    );

    session.handle(Command::Start { set: 0, exercise: 0 }).unwrap();
    let mut rests = 0;
    while session.state().phase != Phase::Complete {
        if session.state().phase == Phase::Rest {
            rests += 1;
            session.handle(Command::Continue).unwrap();
            continue;
        }
        let event = rx.recv().await.expect("countdown task alive");
        session.on_tick_event(event);
    }

    assert_eq!(rests, 1);
    let announced: Vec<String> = sink
        .0
        .lock()
        .unwrap()
        .iter()
        .filter_map(|p| match p {
            CuePlan::Announce { text, .. } => Some(text.clone()),
            CuePlan::Tones { .. } => None,
        })
        .collect();
    assert_eq!(announced, vec!["starting workout", "COMPLETE"]);
}

#[tokio::test(start_paused = true)]
async fn test_stop_drops_pending_ticks() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = WorkoutSession::new(
        WorkoutSequencer::new(&config()).unwrap(),
        TaskClock::new(DEFAULT_TICK_MS, tx),
        Box::new(AudioEngine::new(AudioPreference::Beep, 0.7, SharedSink::default())),
    );

    session.handle(Command::Start { set: 0, exercise: 0 }).unwrap();
    let first = rx.recv().await.unwrap();
    session.handle(Command::Stop).unwrap();

    // A tick that was already queued must not touch the reset session.
    assert!(session.on_tick_event(first).is_empty());
    assert_eq!(session.state().phase, Phase::Idle);
    assert_eq!(session.state().time_remaining_ms, 0);
}

#[tokio::test(start_paused = true)]
async fn test_pause_holds_remaining_time() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = WorkoutSession::new(
        WorkoutSequencer::new(&config()).unwrap(),
        TaskClock::new(DEFAULT_TICK_MS, tx),
        Box::new(AudioEngine::new(AudioPreference::Beep, 0.7, SharedSink::default())),
    );

    session.handle(Command::Start { set: 0, exercise: 0 }).unwrap();
    let event = rx.recv().await.unwrap();
    session.on_tick_event(event);
    let remaining = session.state().time_remaining_ms;

    session.handle(Command::Pause).unwrap();
    tokio::time::sleep(std::time::Duration::from_secs(10)).await;
    while let Ok(event) = rx.try_recv() {
        session.on_tick_event(event);
    }
    assert_eq!(session.state().phase, Phase::Countdown);
    assert_eq!(session.state().time_remaining_ms, remaining);
}

//! Integration tests for full workout runs through the sequencer.

use big3_core::workout::progress;
use big3_core::{Cue, Event, Exercise, Phase, SessionState, WorkoutConfig, WorkoutSequencer};
use proptest::prelude::*;

fn config(pyramid: Vec<u32>, exercises: usize) -> WorkoutConfig {
    WorkoutConfig {
        exercises: (0..exercises)
            .map(|i| Exercise::new(format!("ex-{i}"), format!("Exercise {i}")))
            .collect(),
        pyramid,
        ..WorkoutConfig::default()
    }
}

/// Drive a fresh run to completion by advancing every phase, recording the
/// phase entered after each step and every event.
fn run_to_completion(seq: &mut WorkoutSequencer) -> (Vec<Phase>, Vec<Event>) {
    let mut phases = vec![seq.phase()];
    let mut events = Vec::new();
    while seq.phase() != Phase::Complete {
        let step = seq.advance_phase();
        assert!(!step.is_empty(), "advance stalled in {:?}", seq.phase());
        events.extend(step);
        phases.push(seq.phase());
    }
    (phases, events)
}

#[test]
fn test_two_by_two_pyramid_trace() {
    let mut seq = WorkoutSequencer::new(&config(vec![2, 1], 2)).unwrap();
    seq.start(0, 0).unwrap();

    let (phases, events) = run_to_completion(&mut seq);

    use Phase::*;
    assert_eq!(
        phases,
        vec![
            Countdown, Hold, Pause, Hold, Rest, // A, set 1
            Countdown, Hold, Pause, Hold, Rest, // B, set 1
            Countdown, Hold, Rest, // A, set 2
            Countdown, Hold, Complete, // B, set 2
        ]
    );

    let count = |p: Phase| phases.iter().filter(|&&x| x == p).count();
    assert_eq!(count(Hold), 6);
    assert_eq!(count(Rest), 3);
    assert_eq!(count(Countdown), 4);
    assert_eq!(count(Complete), 1);

    let cues: Vec<Cue> = events.iter().filter_map(Event::cue).collect();
    assert_eq!(
        cues,
        vec![
            Cue::HoldComplete,
            Cue::PauseComplete,
            Cue::SetComplete,
            Cue::HoldComplete,
            Cue::PauseComplete,
            Cue::SetComplete,
            Cue::SetComplete,
        ]
    );
    assert!(!seq.state().is_active);
}

#[test]
fn test_rest_positions_follow_table() {
    let mut seq = WorkoutSequencer::new(&config(vec![2, 1], 2)).unwrap();
    seq.start(0, 0).unwrap();

    let mut rest_positions = Vec::new();
    while seq.phase() != Phase::Complete {
        seq.advance_phase();
        if seq.phase() == Phase::Rest {
            let s = seq.state();
            rest_positions.push((s.set_index, s.exercise_index, s.rep_index));
        }
    }
    assert_eq!(rest_positions, vec![(0, 1, 0), (1, 0, 0), (1, 1, 0)]);
}

#[test]
fn test_skip_matches_natural_timeout() {
    let cfg = config(vec![3, 2], 2);
    let mut natural = WorkoutSequencer::new(&cfg).unwrap();
    let mut skipped = WorkoutSequencer::new(&cfg).unwrap();
    natural.start(0, 0).unwrap();
    skipped.start(0, 0).unwrap();

    // Into the first hold, then part-way through it.
    natural.advance_phase();
    skipped.advance_phase();
    skipped.sync_time_remaining(4_200);

    natural.sync_time_remaining(0);
    let a = natural.advance_phase();
    let b = skipped.skip();
    assert_eq!(natural.state(), skipped.state());
    assert_eq!(a, b);
}

#[test]
fn test_skip_to_position_from_rest() {
    let mut seq = WorkoutSequencer::new(&config(vec![1, 1], 3)).unwrap();
    seq.start(0, 0).unwrap();
    seq.advance_phase();
    seq.advance_phase();
    assert_eq!(seq.phase(), Phase::Rest);

    seq.skip_to_position(1, 2).unwrap();
    let s = seq.state();
    assert_eq!((s.phase, s.set_index, s.exercise_index, s.rep_index), (Phase::Countdown, 1, 2, 0));

    seq.advance_phase();
    let events = seq.advance_phase();
    assert_eq!(seq.phase(), Phase::Complete);
    assert!(events.contains(&Event::WorkoutCompleted));
}

#[test]
fn test_progress_grid_during_run() {
    let mut seq = WorkoutSequencer::new(&config(vec![2, 1], 2)).unwrap();
    seq.start(1, 0).unwrap();
    let grid = progress::progress_grid(seq.plan(), seq.state());
    let completed: Vec<bool> = grid.iter().map(|e| e.completed).collect();
    let current: Vec<bool> = grid.iter().map(|e| e.current).collect();
    assert_eq!(completed, vec![true, true, false, false]);
    assert_eq!(current, vec![false, false, true, false]);
}

#[test]
fn test_stop_from_every_phase() {
    let cfg = config(vec![2, 1], 2);
    let mut probe = WorkoutSequencer::new(&cfg).unwrap();
    probe.start(0, 0).unwrap();
    let mut states = vec![*probe.state()];
    while probe.phase() != Phase::Complete {
        probe.advance_phase();
        states.push(*probe.state());
    }

    for state in states {
        let mut seq = WorkoutSequencer::new(&cfg).unwrap();
        // Replay to the same state.
        seq.start(0, 0).unwrap();
        while *seq.state() != state {
            seq.advance_phase();
        }
        seq.stop();
        let s = seq.state();
        assert_eq!(s.phase, Phase::Idle);
        assert!(!s.is_active);
        assert_eq!(s.time_remaining_ms, 0);
    }
}

proptest! {
    #[test]
    fn prop_full_run_counts(
        pyramid in prop::collection::vec(1u32..6, 1..5),
        exercises in 1usize..5,
    ) {
        let cfg = config(pyramid.clone(), exercises);
        let mut seq = WorkoutSequencer::new(&cfg).unwrap();
        seq.start(0, 0).unwrap();
        let (phases, events) = run_to_completion(&mut seq);

        let count = |p: Phase| phases.iter().filter(|&&x| x == p).count();
        let reps: usize = pyramid.iter().map(|&r| r as usize).sum();
        let pairs = pyramid.len() * exercises;

        prop_assert_eq!(count(Phase::Countdown), pairs);
        prop_assert_eq!(count(Phase::Hold), reps * exercises);
        prop_assert_eq!(count(Phase::Pause), (reps - pyramid.len()) * exercises);
        prop_assert_eq!(count(Phase::Rest), pairs - 1);
        prop_assert_eq!(count(Phase::Complete), 1);

        let hold_cues = events.iter().filter(|e| e.cue() == Some(Cue::HoldComplete)).count();
        let set_cues = events.iter().filter(|e| e.cue() == Some(Cue::SetComplete)).count();
        // Every hold exit cues except the last hold of each (set, exercise).
        prop_assert_eq!(hold_cues, reps * exercises - pairs);
        prop_assert_eq!(set_cues, pairs - 1);
    }

    #[test]
    fn prop_pause_resume_is_identity(
        pyramid in prop::collection::vec(1u32..4, 1..4),
        steps in 0usize..12,
        remaining in 0u64..10_000,
    ) {
        let cfg = config(pyramid, 2);
        let mut seq = WorkoutSequencer::new(&cfg).unwrap();
        seq.start(0, 0).unwrap();
        for _ in 0..steps {
            if seq.phase() == Phase::Complete {
                break;
            }
            seq.advance_phase();
        }
        seq.sync_time_remaining(remaining);
        let before: SessionState = *seq.state();
        seq.pause();
        seq.resume();
        prop_assert_eq!(seq.state().phase, before.phase);
        prop_assert_eq!(seq.state().time_remaining_ms, before.time_remaining_ms);
    }
}

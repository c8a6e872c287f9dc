//! Derived progress and display values. Nothing here is stored.

use serde::Serialize;

use super::plan::Plan;
use super::state::{Phase, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEntry {
    pub set_index: usize,
    pub exercise_index: usize,
    pub label: String,
    pub completed: bool,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub exercises: usize,
    /// Set-exercise pairs performed, i.e. sets times exercises.
    pub sets: usize,
    pub total_reps: usize,
    pub exercise_list: Vec<String>,
}

/// One entry per (set, exercise), set-major.
pub fn progress_grid(plan: &Plan, state: &SessionState) -> Vec<ProgressEntry> {
    let mut entries = Vec::with_capacity(plan.total_sets() * plan.total_exercises());
    for (set_index, &reps) in plan.pyramid().iter().enumerate() {
        for (exercise_index, exercise) in plan.exercises().iter().enumerate() {
            let completed = set_index < state.set_index
                || (set_index == state.set_index && exercise_index < state.exercise_index);
            let current =
                set_index == state.set_index && exercise_index == state.exercise_index;
            entries.push(ProgressEntry {
                set_index,
                exercise_index,
                label: format!("{} - Set {} ({} reps)", exercise.name, set_index + 1, reps),
                completed,
                current,
            });
        }
    }
    entries
}

pub fn completion_summary(plan: &Plan) -> CompletionSummary {
    CompletionSummary {
        exercises: plan.total_exercises(),
        sets: plan.total_sets() * plan.total_exercises(),
        total_reps: plan.total_reps(),
        exercise_list: plan.exercises().iter().map(|e| e.name.clone()).collect(),
    }
}

pub fn phase_label(plan: &Plan, state: &SessionState) -> String {
    match state.phase {
        Phase::Idle => "Ready to start".into(),
        Phase::Countdown => "Get Ready!".into(),
        Phase::Hold => "HOLD".into(),
        Phase::Pause => "Rest".into(),
        Phase::Rest => format!(
            "Get Ready: {}",
            plan.exercise(state.exercise_index)
                .map(|e| e.name.as_str())
                .unwrap_or_default()
        ),
        Phase::Complete => String::new(),
    }
}

/// "Rep 3 of 8", shown only while holding or pausing.
pub fn rep_display(plan: &Plan, state: &SessionState) -> Option<String> {
    match state.phase {
        Phase::Hold | Phase::Pause => Some(format!(
            "Rep {} of {}",
            state.rep_index + 1,
            plan.reps_in_set(state.set_index)
        )),
        _ => None,
    }
}

pub fn progress_text(plan: &Plan, state: &SessionState) -> Option<String> {
    if matches!(state.phase, Phase::Idle | Phase::Complete) {
        return None;
    }
    let set_name = match state.set_index {
        0 => "First".to_string(),
        1 => "Second".to_string(),
        2 => "Third".to_string(),
        n => format!("Set {}", n + 1),
    };
    let name = plan
        .exercise(state.exercise_index)
        .map(|e| e.name.as_str())
        .unwrap_or_default();
    Some(format!(
        "{name} - {set_name} Set ({} reps)",
        plan.reps_in_set(state.set_index)
    ))
}

/// Whole seconds left, rounded up so "1" shows until the phase ends.
pub fn formatted_seconds(remaining_ms: u64) -> u64 {
    remaining_ms.div_ceil(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::config::{Exercise, WorkoutConfig};

    fn plan() -> Plan {
        Plan::new(&WorkoutConfig {
            exercises: vec![Exercise::new("a", "A"), Exercise::new("b", "B")],
            pyramid: vec![2, 1],
            ..WorkoutConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn grid_marks_completed_and_current() {
        let plan = plan();
        let state = SessionState {
            phase: Phase::Hold,
            set_index: 1,
            exercise_index: 0,
            is_active: true,
            ..SessionState::default()
        };
        let grid = progress_grid(&plan, &state);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0].label, "A - Set 1 (2 reps)");
        assert!(grid[0].completed && grid[1].completed);
        assert!(grid[2].current && !grid[2].completed);
        assert!(!grid[3].completed && !grid[3].current);
    }

    #[test]
    fn summary_counts() {
        let summary = completion_summary(&plan());
        assert_eq!(summary.exercises, 2);
        assert_eq!(summary.sets, 4);
        assert_eq!(summary.total_reps, 6);
        assert_eq!(summary.exercise_list, vec!["A", "B"]);
    }

    #[test]
    fn labels_follow_phase() {
        let plan = plan();
        let mut state = SessionState {
            phase: Phase::Rest,
            exercise_index: 1,
            ..SessionState::default()
        };
        assert_eq!(phase_label(&plan, &state), "Get Ready: B");
        assert_eq!(rep_display(&plan, &state), None);

        state.phase = Phase::Pause;
        state.rep_index = 1;
        state.set_index = 0;
        assert_eq!(rep_display(&plan, &state).as_deref(), Some("Rep 2 of 2"));
        assert_eq!(progress_text(&plan, &state).as_deref(), Some("B - First Set (2 reps)"));
    }

    #[test]
    fn seconds_round_up() {
        assert_eq!(formatted_seconds(0), 0);
        assert_eq!(formatted_seconds(100), 1);
        assert_eq!(formatted_seconds(1_000), 1);
        assert_eq!(formatted_seconds(2_900), 3);
    }
}

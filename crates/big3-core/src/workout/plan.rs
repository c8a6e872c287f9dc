use serde::Serialize;

use super::config::{Exercise, WorkoutConfig};
use super::state::Phase;
use crate::error::ValidationError;

/// Validated, immutable view of a [`WorkoutConfig`] that the sequencer runs
/// against. Durations are converted to milliseconds once, here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    exercises: Vec<Exercise>,
    pyramid: Vec<u32>,
    hold_ms: u64,
    pause_ms: u64,
    countdown_ms: u64,
}

impl Plan {
    /// # Errors
    ///
    /// Returns the first invariant the configuration breaks.
    pub fn new(config: &WorkoutConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            exercises: config.exercises.clone(),
            pyramid: config.pyramid.clone(),
            hold_ms: secs_to_ms(config.hold_duration),
            pause_ms: secs_to_ms(config.pause_duration),
            countdown_ms: secs_to_ms(config.countdown_duration),
        })
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn pyramid(&self) -> &[u32] {
        &self.pyramid
    }

    pub fn exercise(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    pub fn total_sets(&self) -> usize {
        self.pyramid.len()
    }

    pub fn total_exercises(&self) -> usize {
        self.exercises.len()
    }

    /// Rep count for `set`, or zero past the end.
    pub fn reps_in_set(&self, set: usize) -> usize {
        self.pyramid.get(set).map(|&r| r as usize).unwrap_or(0)
    }

    /// Reps across the whole workout: every set, for every exercise.
    pub fn total_reps(&self) -> usize {
        self.pyramid.iter().map(|&r| r as usize).sum::<usize>() * self.total_exercises()
    }

    pub fn contains(&self, set: usize, exercise: usize) -> bool {
        set < self.total_sets() && exercise < self.total_exercises()
    }

    /// Length of `phase` in milliseconds; zero for untimed phases.
    pub fn duration_ms(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Countdown => self.countdown_ms,
            Phase::Hold => self.hold_ms,
            Phase::Pause => self.pause_ms,
            Phase::Idle | Phase::Rest | Phase::Complete => 0,
        }
    }
}

fn secs_to_ms(secs: u32) -> u64 {
    u64::from(secs).saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_totals() {
        let plan = Plan::new(&WorkoutConfig::default()).unwrap();
        assert_eq!(plan.total_sets(), 3);
        assert_eq!(plan.total_exercises(), 3);
        assert_eq!(plan.total_reps(), (12 + 8 + 4) * 3);
        assert_eq!(plan.duration_ms(Phase::Hold), 10_000);
        assert_eq!(plan.duration_ms(Phase::Rest), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = WorkoutConfig::default();
        cfg.pyramid.clear();
        assert!(Plan::new(&cfg).is_err());
    }
}

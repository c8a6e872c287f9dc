//! User-editable workout configuration.
//!
//! A [`WorkoutConfig`] is what the user edits and what the config store
//! persists. Every field carries a serde default, so a file written by an
//! older version loads with the missing fields filled in.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
}

impl Exercise {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioPreference {
    #[default]
    Beep,
    Chime,
    Announce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Named bundles of pyramid and timing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Beginner,
    Advanced,
}

impl std::str::FromStr for Preset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Preset::Beginner),
            "advanced" => Ok(Preset::Advanced),
            other => Err(ValidationError::InvalidValue {
                field: "preset".into(),
                message: format!("unknown preset '{other}' (expected beginner or advanced)"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl std::str::FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ValidationError::InvalidValue {
                field: "direction".into(),
                message: format!("expected 'up' or 'down', got '{other}'"),
            }),
        }
    }
}

/// Workout configuration.
///
/// Durations are whole seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Reps per set, in the order the sets are performed.
    #[serde(default = "default_pyramid")]
    pub pyramid: Vec<u32>,
    #[serde(default = "default_hold_duration")]
    pub hold_duration: u32,
    /// Seconds between holds of the same set.
    #[serde(default = "default_pause_duration")]
    pub pause_duration: u32,
    /// "Get ready" seconds before the first hold of a set.
    #[serde(default = "default_countdown_duration")]
    pub countdown_duration: u32,
    #[serde(default)]
    pub audio_preference: AudioPreference,
    /// Cue loudness in 0.0..=1.0.
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default)]
    pub theme: Theme,
    /// Exercises in the order each set visits them. Kept last so the TOML
    /// array of tables follows the scalar keys.
    #[serde(default = "default_exercises")]
    pub exercises: Vec<Exercise>,
}

fn default_exercises() -> Vec<Exercise> {
    vec![
        Exercise::new("curl-up", "Curl Up"),
        Exercise::new("side-plank", "Side Plank"),
        Exercise::new("bird-dog", "Bird Dog"),
    ]
}
fn default_pyramid() -> Vec<u32> {
    vec![12, 8, 4]
}
fn default_hold_duration() -> u32 {
    10
}
fn default_pause_duration() -> u32 {
    3
}
fn default_countdown_duration() -> u32 {
    3
}
fn default_volume() -> f64 {
    0.7
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            pyramid: default_pyramid(),
            hold_duration: default_hold_duration(),
            pause_duration: default_pause_duration(),
            countdown_duration: default_countdown_duration(),
            audio_preference: AudioPreference::default(),
            volume: default_volume(),
            theme: Theme::default(),
            exercises: default_exercises(),
        }
    }
}

impl WorkoutConfig {
    /// Check every invariant the sequencer relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exercises.is_empty() {
            return Err(ValidationError::EmptyCollection("exercises".into()));
        }
        if self.pyramid.is_empty() {
            return Err(ValidationError::EmptyCollection("pyramid".into()));
        }

        let mut seen = HashSet::new();
        for exercise in &self.exercises {
            if exercise.id.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "exercises.id".into(),
                    message: "exercise id must not be empty".into(),
                });
            }
            if exercise.name.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "exercises.name".into(),
                    message: format!("exercise '{}' has an empty name", exercise.id),
                });
            }
            if !seen.insert(exercise.id.as_str()) {
                return Err(ValidationError::DuplicateId(exercise.id.clone()));
            }
        }

        if let Some(set) = self.pyramid.iter().position(|&reps| reps == 0) {
            return Err(ValidationError::InvalidValue {
                field: format!("pyramid[{set}]"),
                message: "each set needs at least one rep".into(),
            });
        }

        for (field, value) in [
            ("hold_duration", self.hold_duration),
            ("pause_duration", self.pause_duration),
            ("countdown_duration", self.countdown_duration),
        ] {
            if value == 0 {
                return Err(ValidationError::InvalidValue {
                    field: field.into(),
                    message: "duration must be at least one second".into(),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ValidationError::InvalidValue {
                field: "volume".into(),
                message: format!("{} is outside 0.0..=1.0", self.volume),
            });
        }

        Ok(())
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::Beginner => {
                self.pyramid = vec![8, 4, 2];
                self.hold_duration = 7;
                self.pause_duration = 4;
            }
            Preset::Advanced => {
                self.pyramid = vec![12, 8, 4];
                self.hold_duration = 10;
                self.pause_duration = 3;
            }
        }
    }

    /// Swap the exercise at `index` with its neighbour. Moving past either
    /// end leaves the order untouched.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if there is no exercise at `index`.
    pub fn move_exercise(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> Result<(), ValidationError> {
        let len = self.exercises.len();
        if index >= len {
            return Err(ValidationError::OutOfBounds {
                collection: "exercises".into(),
                index,
                len,
            });
        }
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&t| t < len),
        };
        if let Some(target) = target {
            self.exercises.swap(index, target);
        }
        Ok(())
    }
}

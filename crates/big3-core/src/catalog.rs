//! Exercise catalog: descriptions and demonstration videos keyed by id.
//!
//! The catalog only enriches the configured exercises. When it is missing,
//! unreadable, or has no entry for an id, callers fall back to the bare
//! `{id, name}` from the configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::workout::Exercise;

/// Catalog shipped with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../data/exercises.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDetails {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl From<&Exercise> for ExerciseDetails {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.clone(),
            name: exercise.name.clone(),
            description: None,
            videos: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub exercises: Vec<ExerciseDetails>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `Parse` if `json` is not a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns `Read` or `Parse` on failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load `path`, degrading to an empty catalog on failure.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "exercise catalog unavailable, using configured names only");
            Self::default()
        })
    }

    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_CATALOG).unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<&ExerciseDetails> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Full details for `exercise`, or its bare id and name.
    pub fn lookup(&self, exercise: &Exercise) -> ExerciseDetails {
        self.get(&exercise.id)
            .cloned()
            .unwrap_or_else(|| ExerciseDetails::from(exercise))
    }
}

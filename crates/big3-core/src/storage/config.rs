//! TOML-backed persistence for [`WorkoutConfig`].
//!
//! Loading never fails: a missing file yields defaults, and a file that
//! cannot be read or parsed is logged and replaced by defaults in memory.
//! Saving validates first, so a configuration that would break the
//! sequencer is rejected here rather than discovered mid-workout.
//!
//! Configuration is stored at `~/.config/big3-timer/config.toml`.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::workout::{Direction, Preset, WorkoutConfig};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(data_dir().join("config.toml"))
    }
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last saved configuration merged over defaults.
    pub fn load(&self) -> WorkoutConfig {
        match self.try_load() {
            Ok(Some(cfg)) => cfg,
            Ok(None) => WorkoutConfig::default(),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default workout configuration");
                WorkoutConfig::default()
            }
        }
    }

    /// Like [`load`](Self::load) but reports failures. `Ok(None)` means no
    /// file has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `LoadFailed` if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<Option<WorkoutConfig>, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::LoadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }

    /// Validate and overwrite the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for a configuration that breaks an invariant, or
    /// `SaveFailed` if it cannot be written.
    pub fn save(&self, config: &WorkoutConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: self.path.clone(),
            message,
        };
        let content = toml::to_string_pretty(config).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(&self.path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), "workout configuration saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SaveFailed` if the defaults cannot be written.
    pub fn reset(&self) -> Result<WorkoutConfig, ConfigError> {
        let cfg = WorkoutConfig::default();
        self.save(&cfg)?;
        Ok(cfg)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        get_value(&self.load(), key)
    }

    /// Set a config value by key and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be coerced,
    /// the result is invalid, or it cannot be saved.
    pub fn set(&self, key: &str, value: &str) -> Result<WorkoutConfig, ConfigError> {
        let updated = set_value(&self.load(), key, value)?;
        self.save(&updated)?;
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns `SaveFailed` if the result cannot be written.
    pub fn apply_preset(&self, preset: Preset) -> Result<WorkoutConfig, ConfigError> {
        let mut cfg = self.load();
        cfg.apply_preset(preset);
        self.save(&cfg)?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns `Invalid` if there is no exercise at `index`, or
    /// `SaveFailed` if the result cannot be written.
    pub fn move_exercise(
        &self,
        index: usize,
        direction: Direction,
    ) -> Result<WorkoutConfig, ConfigError> {
        let mut cfg = self.load();
        cfg.move_exercise(index, direction)?;
        self.save(&cfg)?;
        Ok(cfg)
    }
}

fn get_json_value_by_path<'a>(
    root: &'a serde_json::Value,
    key: &str,
) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }

    let mut current = root;
    for part in key.split('.') {
        current = match current {
            serde_json::Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            other => other.get(part)?,
        };
    }
    Some(current)
}

fn set_json_value_by_path(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let unknown = || ConfigError::UnknownKey(key.to_string());
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() || key.is_empty() {
        return Err(unknown());
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let slot = match current {
            serde_json::Value::Array(items) => {
                let index: usize = part.parse().map_err(|_| unknown())?;
                items.get_mut(index).ok_or_else(unknown)?
            }
            serde_json::Value::Object(obj) => obj.get_mut(part).ok_or_else(unknown)?,
            _ => return Err(unknown()),
        };

        if parts.peek().is_none() {
            let new_value = match &*slot {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<u64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(invalid(format!("cannot parse '{value}' as number")));
                    }
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };
            *slot = new_value;
            return Ok(());
        }
        current = slot;
    }

    Err(unknown())
}

fn get_value(config: &WorkoutConfig, key: &str) -> Option<String> {
    let json = serde_json::to_value(config).ok()?;
    let val = get_json_value_by_path(&json, key)?;
    match val {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn set_value(config: &WorkoutConfig, key: &str, value: &str) -> Result<WorkoutConfig, ConfigError> {
    let mut json = serde_json::to_value(config).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    set_json_value_by_path(&mut json, key, value)?;
    let updated: WorkoutConfig =
        serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
    updated.validate()?;
    Ok(updated)
}

//! Integration tests for configuration persistence.

use big3_core::workout::{AudioPreference, Direction, Preset};
use big3_core::{ConfigError, ConfigStore, ValidationError, WorkoutConfig};

fn store() -> (tempfile::TempDir, ConfigStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("nested").join("config.toml"));
    (dir, store)
}

#[test]
fn test_missing_file_loads_defaults() {
    let (_dir, store) = store();
    assert_eq!(store.try_load().unwrap(), None);
    assert_eq!(store.load(), WorkoutConfig::default());
}

#[test]
fn test_save_then_load_roundtrip() {
    let (_dir, store) = store();
    let mut cfg = WorkoutConfig::default();
    cfg.pyramid = vec![6, 4];
    cfg.audio_preference = AudioPreference::Chime;
    store.save(&cfg).unwrap();
    assert_eq!(store.load(), cfg);
}

#[test]
fn test_partial_file_merges_over_defaults() {
    let (_dir, store) = store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "hold_duration = 20\ntheme = \"light\"\n").unwrap();

    let cfg = store.load();
    assert_eq!(cfg.hold_duration, 20);
    assert_eq!(cfg.theme, big3_core::workout::Theme::Light);
    assert_eq!(cfg.pyramid, vec![12, 8, 4]);
    assert_eq!(cfg.exercises.len(), 3);
}

#[test]
fn test_corrupt_file_falls_back_silently() {
    let (_dir, store) = store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "pyramid = \"not a list\"").unwrap();

    assert!(matches!(store.try_load(), Err(ConfigError::LoadFailed { .. })));
    assert_eq!(store.load(), WorkoutConfig::default());
}

#[test]
fn test_invalid_config_rejected_on_save() {
    let (_dir, store) = store();
    let mut cfg = WorkoutConfig::default();
    cfg.exercises.clear();
    assert!(matches!(store.save(&cfg), Err(ConfigError::Invalid(_))));
    assert!(!store.path().exists());
}

#[test]
fn test_set_persists_and_validates() {
    let (_dir, store) = store();
    store.set("pause_duration", "5").unwrap();
    assert_eq!(store.get("pause_duration").as_deref(), Some("5"));

    assert!(store.set("countdown_duration", "0").is_err());
    assert_eq!(store.load().countdown_duration, 3);
}

#[test]
fn test_preset_and_move() {
    let (_dir, store) = store();
    store.apply_preset(Preset::Beginner).unwrap();
    store.move_exercise(2, Direction::Up).unwrap();

    let cfg = store.load();
    assert_eq!(cfg.pyramid, vec![8, 4, 2]);
    assert_eq!(cfg.hold_duration, 7);
    let ids: Vec<_> = cfg.exercises.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["curl-up", "bird-dog", "side-plank"]);
}

#[test]
fn test_move_missing_exercise_is_rejected() {
    let (_dir, store) = store();
    let err = store.move_exercise(5, Direction::Down).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(ValidationError::OutOfBounds { index: 5, len: 3, .. })
    ));
    assert!(!store.path().exists());
}

#[test]
fn test_reset_overwrites() {
    let (_dir, store) = store();
    store.set("hold_duration", "30").unwrap();
    store.reset().unwrap();
    assert_eq!(store.load().hold_duration, 10);
}

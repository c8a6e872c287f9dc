mod config;

pub use config::ConfigStore;

use std::path::PathBuf;

/// Returns the directory holding the user's settings.
///
/// `BIG3_CONFIG_DIR` wins when set. Otherwise `~/.config/big3-timer[-dev]/`,
/// with the `-dev` suffix when `BIG3_ENV=dev`.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("BIG3_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BIG3_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("big3-timer-dev")
    } else {
        base_dir.join("big3-timer")
    }
}

use big3_core::workout::{Direction, Preset};
use big3_core::ConfigStore;
use clap::Subcommand;

use super::one_based;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "hold_duration", "pyramid.0", "exercises.1.name")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Apply a pyramid preset (beginner or advanced)
    Preset {
        name: Preset,
    },
    /// Move an exercise up or down in the order
    Move {
        /// Exercise position (1-based)
        index: usize,
        /// "up" or "down"
        direction: Direction,
    },
}

pub fn run(action: ConfigAction) -> big3_core::Result<()> {
    let store = ConfigStore::default();
    match action {
        ConfigAction::Get { key } => match store.get(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("unknown key: {key}");
                std::process::exit(1);
            }
        },
        ConfigAction::Set { key, value } => {
            store.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => {
            let json = serde_json::to_string_pretty(&store.load())?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            store.reset()?;
            println!("config reset to defaults");
        }
        ConfigAction::Preset { name } => {
            let config = store.apply_preset(name)?;
            println!("pyramid: {:?}", config.pyramid);
        }
        ConfigAction::Move { index, direction } => {
            let config = store.move_exercise(one_based("index", index)?, direction)?;
            let names: Vec<&str> = config.exercises.iter().map(|e| e.name.as_str()).collect();
            println!("{}", names.join(", "));
        }
    }
    Ok(())
}

//! Keyboard input to sequencer commands.
//!
//! Input arrives a line at a time, so "keys" are short words: an empty line
//! is Enter, `p` or a lone space toggles pause, and so on.

use big3_core::{Command, Phase, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    TogglePause,
    Skip,
    Stop,
    /// 1-based set and exercise, as typed.
    Jump { set: usize, exercise: usize },
    Help,
}

pub fn parse(line: &str) -> Option<Key> {
    if line.chars().all(|c| c == ' ') && !line.is_empty() {
        return Some(Key::TogglePause);
    }
    let mut words = line.split_whitespace();
    let key = match words.next() {
        None => Key::Enter,
        Some("p") | Some("pause") => Key::TogglePause,
        Some("s") | Some("skip") => Key::Skip,
        Some("q") | Some("esc") | Some("stop") => Key::Stop,
        Some("?") | Some("h") | Some("help") => Key::Help,
        Some("j") | Some("jump") => {
            let set = words.next()?.parse().ok()?;
            let exercise = words.next()?.parse().ok()?;
            Key::Jump { set, exercise }
        }
        Some(_) => return None,
    };
    Some(key)
}

/// The command `key` maps to in `state`, if any. Guards mirror what the
/// sequencer accepts, so the prompt never offers a silent no-op.
pub fn command_for(key: Key, state: &SessionState) -> Option<Command> {
    match key {
        Key::Enter if !state.is_active => Some(Command::Start {
            set: 0,
            exercise: 0,
        }),
        Key::Enter if state.is_paused => Some(Command::Resume),
        Key::Enter if state.phase == Phase::Rest => Some(Command::Continue),
        Key::Enter => None,
        Key::TogglePause if state.is_interruptible() => Some(Command::TogglePause),
        Key::Skip if state.is_interruptible() => Some(Command::Skip),
        Key::TogglePause | Key::Skip => None,
        Key::Stop if state.is_active => Some(Command::Stop),
        Key::Stop => None,
        Key::Jump { set, exercise } if set >= 1 && exercise >= 1 => Some(Command::JumpTo {
            set: set - 1,
            exercise: exercise - 1,
        }),
        Key::Jump { .. } | Key::Help => None,
    }
}

pub const HELP: &str = "\
  <enter>        start / continue after rest / resume
  p or <space>   pause / resume
  s              skip to the next phase
  j <set> <ex>   jump to a set and exercise (1-based)
  q              stop (quit when idle)
  ?              this help";

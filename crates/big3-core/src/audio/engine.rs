//! Cue rendering.
//!
//! `AudioEngine` turns a [`Cue`] into a [`CuePlan`] (tones or an
//! announcement) according to the user's audio preference, throttles
//! bursts, and hands the plan to a [`CueSink`]. The engine is an ordinary
//! owned value: the session creates it, starts it with the workout and
//! stops it with the workout.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::events::Cue;
use crate::workout::AudioPreference;

/// Minimum gap between two rendered cues.
pub const MIN_CUE_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    /// Offset from the start of the plan.
    pub delay_ms: u32,
    pub volume: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CuePlan {
    Tones { tones: Vec<Tone> },
    Announce { text: String, volume: f32 },
}

/// Where rendered cues end up (speaker, terminal, test recorder).
pub trait CueSink: Send {
    fn play(&mut self, plan: &CuePlan);
}

/// Consumer of sequencer cue events.
pub trait CueDispatcher: Send {
    fn dispatch(&mut self, cue: Cue);

    fn on_session_start(&mut self) {}

    fn on_session_stop(&mut self) {}
}

pub struct AudioEngine<S: CueSink> {
    preference: AudioPreference,
    volume: f32,
    sink: S,
    active: bool,
    last_played: Option<Instant>,
}

impl<S: CueSink> AudioEngine<S> {
    /// `volume` is clamped to 0.0..=1.0 and narrowed for playback.
    pub fn new(preference: AudioPreference, volume: f64, sink: S) -> Self {
        Self {
            preference,
            volume: volume.clamp(0.0, 1.0) as f32,
            sink,
            active: false,
            last_played: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The plan `cue` renders to under the current preference.
    pub fn plan(&self, cue: Cue) -> CuePlan {
        plan_for(self.preference, self.volume, cue)
    }

    /// Render `cue` if the throttle window allows it. Returns whether it
    /// was played.
    pub fn play_at(&mut self, cue: Cue, now: Instant) -> bool {
        if let Some(last) = self.last_played {
            if now.saturating_duration_since(last) < MIN_CUE_INTERVAL {
                tracing::debug!(?cue, "cue throttled");
                return false;
            }
        }
        self.last_played = Some(now);
        let plan = self.plan(cue);
        self.sink.play(&plan);
        true
    }
}

impl<S: CueSink> CueDispatcher for AudioEngine<S> {
    fn dispatch(&mut self, cue: Cue) {
        self.play_at(cue, Instant::now());
    }

    fn on_session_start(&mut self) {
        self.active = true;
        self.last_played = None;
        if self.preference == AudioPreference::Announce {
            self.sink.play(&CuePlan::Announce {
                text: "starting workout".into(),
                volume: self.volume,
            });
        }
    }

    fn on_session_stop(&mut self) {
        self.active = false;
    }
}

fn tone(frequency_hz: u32, duration_ms: u32, delay_ms: u32, volume: f32) -> Tone {
    Tone {
        frequency_hz,
        duration_ms,
        delay_ms,
        volume,
    }
}

pub fn plan_for(preference: AudioPreference, volume: f32, cue: Cue) -> CuePlan {
    let announce = |text: &str| CuePlan::Announce {
        text: text.into(),
        volume,
    };
    let tones = |tones: Vec<Tone>| CuePlan::Tones { tones };

    match (preference, cue) {
        (AudioPreference::Announce, Cue::HoldComplete) => announce("HOLD"),
        (AudioPreference::Announce, Cue::PauseComplete) => announce("REST"),
        (AudioPreference::Announce, Cue::SetComplete) => announce("COMPLETE"),

        // C5 then E5.
        (AudioPreference::Chime, Cue::HoldComplete) => {
            tones(vec![tone(523, 150, 0, volume), tone(659, 150, 150, volume)])
        }
        (AudioPreference::Beep, Cue::HoldComplete) => tones(vec![tone(800, 200, 0, volume)]),

        (_, Cue::PauseComplete) => {
            tones(vec![tone(600, 100, 0, volume), tone(800, 100, 120, volume)])
        }
        // G4, C5, then a longer E5.
        (_, Cue::SetComplete) => tones(vec![
            tone(392, 200, 0, volume),
            tone(523, 200, 250, volume),
            tone(659, 300, 550, volume),
        ]),
    }
}

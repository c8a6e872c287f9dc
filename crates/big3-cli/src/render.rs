//! Terminal presentation: status lines, progress grid, cue output.

use std::io::Write;

use big3_core::audio::{CuePlan, CueSink};
use big3_core::workout::progress::{self, CompletionSummary, ProgressEntry};
use big3_core::workout::Theme;
use big3_core::{Phase, Plan, SessionState};

/// Plays cues on a terminal: tones ring the bell, announcements are printed.
pub struct TerminalSink;

impl CueSink for TerminalSink {
    fn play(&mut self, plan: &CuePlan) {
        if let Err(e) = write_cue(&mut std::io::stdout().lock(), plan) {
            tracing::debug!(error = %e, "cue not written to terminal");
        }
    }
}

fn write_cue(out: &mut impl Write, plan: &CuePlan) -> std::io::Result<()> {
    match plan {
        CuePlan::Tones { tones } => {
            tracing::debug!(tones = tones.len(), "bell");
            write!(out, "\x07")?;
        }
        CuePlan::Announce { text, .. } => writeln!(out, "  >> {text}")?,
    }
    out.flush()
}

fn phase_colour(phase: Phase, theme: Theme) -> &'static str {
    match (phase, theme) {
        (Phase::Hold, Theme::Dark) => "\x1b[1;92m",
        (Phase::Hold, Theme::Light) => "\x1b[1;32m",
        (Phase::Countdown, _) => "\x1b[1;33m",
        (Phase::Pause, _) | (Phase::Rest, _) => "\x1b[1;36m",
        (Phase::Complete, _) => "\x1b[1;35m",
        (Phase::Idle, _) => "\x1b[0m",
    }
}

pub fn status_line(plan: &Plan, state: &SessionState, theme: Theme) -> String {
    let mut line = format!(
        "{}{:<14}\x1b[0m",
        phase_colour(state.phase, theme),
        progress::phase_label(plan, state)
    );
    if state.phase.is_timed() {
        line.push_str(&format!(
            " {:>3}s",
            progress::formatted_seconds(state.time_remaining_ms)
        ));
    }
    if let Some(rep) = progress::rep_display(plan, state) {
        line.push_str(&format!("  {rep}"));
    }
    if let Some(text) = progress::progress_text(plan, state) {
        line.push_str(&format!("  | {text}"));
    }
    if state.is_paused {
        line.push_str("  [paused]");
    }
    line
}

pub fn progress_lines(entries: &[ProgressEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            let mark = if e.completed {
                "✓"
            } else if e.current {
                "▶"
            } else {
                "○"
            };
            format!("  {mark} {}", e.label)
        })
        .collect()
}

pub fn summary_lines(summary: &CompletionSummary) -> Vec<String> {
    vec![
        "Workout complete!".to_string(),
        format!("  exercises:  {}", summary.exercises),
        format!("  sets:       {}", summary.sets),
        format!("  total reps: {}", summary.total_reps),
        format!("  {}", summary.exercise_list.join(", ")),
    ]
}

use big3_core::timer::DEFAULT_TICK_MS;
use big3_core::workout::progress;
use big3_core::{
    AudioEngine, ConfigStore, Event, Phase, Plan, TaskClock, WorkoutConfig, WorkoutSequencer,
    WorkoutSession,
};
use clap::Subcommand;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::one_based;
use crate::keys::{self, Key};
use crate::render::{self, TerminalSink};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Run a workout interactively
    Run {
        /// Set to start from (1-based)
        #[arg(long, default_value = "1")]
        set: usize,
        /// Exercise to start from (1-based)
        #[arg(long, default_value = "1")]
        exercise: usize,
    },
    /// Print the full phase sequence without waiting on any timers
    Plan {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the progress grid for a position
    Progress {
        /// Current set (1-based)
        #[arg(long, default_value = "1")]
        set: usize,
        /// Current exercise (1-based)
        #[arg(long, default_value = "1")]
        exercise: usize,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: WorkoutAction) -> big3_core::Result<()> {
    let config = ConfigStore::default().load();

    match action {
        WorkoutAction::Run { set, exercise } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(drive(
                config,
                one_based("set", set)?,
                one_based("exercise", exercise)?,
            ))?;
        }
        WorkoutAction::Plan { json } => {
            let steps = dry_run(&config)?;
            let summary = progress::completion_summary(&Plan::new(&config)?);
            if json {
                let out = serde_json::json!({ "steps": steps, "summary": summary });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                let mut total_ms = 0u64;
                for (i, step) in steps.iter().enumerate() {
                    if let Event::PhaseChanged {
                        to,
                        set_index,
                        exercise_index,
                        rep_index,
                        duration_ms,
                        ..
                    } = step
                    {
                        total_ms += duration_ms;
                        let name = config
                            .exercises
                            .get(*exercise_index)
                            .map(|e| e.name.as_str())
                            .unwrap_or_default();
                        println!(
                            "{:>4}. {:<9} set {} {:<12} rep {:>2} {:>3}s",
                            i + 1,
                            to,
                            set_index + 1,
                            name,
                            rep_index + 1,
                            duration_ms / 1000
                        );
                    }
                }
                for line in render::summary_lines(&summary) {
                    println!("{line}");
                }
                println!(
                    "  timed: {}m {}s (rests not included)",
                    total_ms / 60_000,
                    (total_ms / 1000) % 60
                );
            }
        }
        WorkoutAction::Progress {
            set,
            exercise,
            json,
        } => {
            let mut seq = WorkoutSequencer::new(&config)?;
            seq.start(one_based("set", set)?, one_based("exercise", exercise)?)?;
            let grid = progress::progress_grid(seq.plan(), seq.state());
            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                for line in render::progress_lines(&grid) {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}

/// Every `PhaseChanged` event of a complete run, from the first countdown
/// to completion.
fn dry_run(config: &WorkoutConfig) -> big3_core::Result<Vec<Event>> {
    let mut seq = WorkoutSequencer::new(config)?;
    let mut steps: Vec<Event> = seq
        .start(0, 0)?
        .into_iter()
        .filter(|e| e.entered_phase().is_some())
        .collect();
    while seq.phase() != Phase::Complete {
        steps.extend(
            seq.advance_phase()
                .into_iter()
                .filter(|e| e.entered_phase().is_some()),
        );
    }
    Ok(steps)
}

async fn drive(
    config: WorkoutConfig,
    set: usize,
    exercise: usize,
) -> big3_core::Result<()> {
    let (tx, mut ticks) = mpsc::unbounded_channel();
    let engine = AudioEngine::new(config.audio_preference, config.volume, TerminalSink);
    let mut session = WorkoutSession::new(
        WorkoutSequencer::new(&config)?,
        TaskClock::new(DEFAULT_TICK_MS, tx),
        Box::new(engine),
    );
    let theme = config.theme;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "Big3 Timer ({} sets x {} exercises)",
        config.pyramid.len(),
        config.exercises.len()
    );
    println!("{}", keys::HELP);
    session.handle(big3_core::Command::Start { set, exercise })?;
    print_status(&session, theme);

    let mut last_second = None;
    loop {
        tokio::select! {
            Some(event) = ticks.recv() => {
                let events = session.on_tick_event(event);
                let second = progress::formatted_seconds(session.state().time_remaining_ms);
                if !events.is_empty() || last_second != Some(second) {
                    last_second = Some(second);
                    print_status(&session, theme);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    session.handle(big3_core::Command::Stop)?;
                    break;
                };
                match keys::parse(&line) {
                    Some(Key::Help) => println!("{}", keys::HELP),
                    Some(Key::Stop) if !session.state().is_active => break,
                    Some(key) => match keys::command_for(key, session.state()) {
                        Some(command) => match session.handle(command) {
                            Ok(_) => print_status(&session, theme),
                            Err(e) => println!("  {e}"),
                        },
                        None => tracing::debug!(?key, "key ignored in current phase"),
                    },
                    None => println!("  unknown key '{line}' (? for help)"),
                }
            }
        }

        if session.state().phase == Phase::Complete {
            let summary = progress::completion_summary(session.sequencer().plan());
            for line in render::summary_lines(&summary) {
                println!("{line}");
            }
            break;
        }
    }
    Ok(())
}

fn print_status(session: &WorkoutSession<TaskClock>, theme: big3_core::workout::Theme) {
    let seq = session.sequencer();
    println!("{}", render::status_line(seq.plan(), seq.state(), theme));
}

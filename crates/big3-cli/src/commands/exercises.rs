use std::path::PathBuf;

use big3_core::{Catalog, ConfigStore, ExerciseDetails};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ExercisesAction {
    /// List the configured exercises with their catalog details
    List {
        /// Catalog file to read instead of the bundled one
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ExercisesAction) -> big3_core::Result<()> {
    match action {
        ExercisesAction::List { catalog, json } => {
            let catalog = match catalog {
                Some(path) => Catalog::load_or_empty(path),
                None => Catalog::bundled(),
            };
            let config = ConfigStore::default().load();
            let details: Vec<ExerciseDetails> =
                config.exercises.iter().map(|e| catalog.lookup(e)).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
                return Ok(());
            }
            for (i, exercise) in details.iter().enumerate() {
                println!("{}. {} ({})", i + 1, exercise.name, exercise.id);
                if let Some(description) = &exercise.description {
                    println!("   {description}");
                }
                for video in &exercise.videos {
                    println!("   - {}: {}", video.title, video.url);
                }
            }
        }
    }
    Ok(())
}

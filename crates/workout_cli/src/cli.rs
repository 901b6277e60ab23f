//! Command-line surface of the tracker.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workout_core::{ExerciseId, SessionId, TemplateId, DEFAULT_DB_FILE_NAME};

pub const DEFAULT_HISTORY_LIMIT: u32 = 5;

#[derive(Parser, Debug)]
#[command(version, about = "Workout Tracker - plan workouts and log sessions", long_about = None)]
pub struct Cli {
    /// Database file; created and seeded when missing.
    #[arg(long, default_value = DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,
    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long)]
    pub log_level: Option<String>,
    /// Directory for rolling log files. Defaults to `./logs`.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    /// Print records as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List the exercise library.
    Exercises {
        /// Filter by name, muscle group or equipment.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add an exercise to the library.
    ExerciseAdd {
        name: String,
        #[arg(short, long)]
        muscle_group: String,
        #[arg(short, long)]
        equipment: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show one exercise with its description.
    ExerciseShow { id: ExerciseId },
    /// Change fields of an exercise; omitted fields keep their value.
    ExerciseEdit {
        id: ExerciseId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        muscle_group: Option<String>,
        #[arg(short, long)]
        equipment: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Remove an exercise that no template or log uses.
    ExerciseDelete { id: ExerciseId },
    /// List workout templates.
    Templates,
    /// Show a template and its prescribed exercises.
    TemplateShow { id: TemplateId },
    /// Create an empty workout template.
    TemplateCreate {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Prescribe an exercise in a template.
    TemplateAddExercise {
        template_id: TemplateId,
        exercise_id: ExerciseId,
        #[arg(long, default_value_t = 3)]
        sets: i64,
        #[arg(long, default_value = "8-10")]
        reps: String,
        /// Rest between sets, in seconds.
        #[arg(long)]
        rest: Option<i64>,
    },
    /// Start a session for a template.
    SessionStart { template_id: TemplateId },
    /// Record one set performed during a session.
    SessionLog {
        session_id: SessionId,
        exercise_id: ExerciseId,
        #[arg(long = "set")]
        set_number: i64,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        reps: Option<i64>,
        /// Mark the set as attempted but not completed.
        #[arg(long)]
        skipped: bool,
    },
    /// Finish a session.
    SessionComplete {
        session_id: SessionId,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show a session and its logged sets.
    SessionShow { session_id: SessionId },
    /// Recent sessions, newest first.
    History {
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
    },
}

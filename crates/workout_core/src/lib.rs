//! Persistence core for the workout tracker.
//! This crate owns the database file and every query made against it.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use db::{DbError, DbResult, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, init_logging};
pub use model::exercise::{
    Exercise, ExerciseDraft, ExerciseSummary, ExerciseValidationError, NewExercise,
    KNOWN_MUSCLE_GROUPS,
};
pub use model::session::{
    ExerciseLog, NewExerciseLog, SessionState, SessionSummary, WorkoutSession,
};
pub use model::template::{NewTemplateExercise, TemplateExercise, WorkoutTemplate};
pub use model::{ExerciseId, LogId, SessionId, TemplateExerciseId, TemplateId};
pub use repo::exercise_repo::DeleteOutcome;
pub use repo::{RepoError, RepoResult};
pub use store::WorkoutStore;


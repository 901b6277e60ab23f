//! Workout data store facade.
//!
//! # Responsibility
//! - Own the single SQLite connection for the lifetime of the application.
//! - Serve typed CRUD operations to presentation code.
//!
//! # Invariants
//! - Callers never compose multi-statement transactions through the store.
//! - The store performs no domain validation. Referenced ids are not
//!   checked on insert. Engine errors (I/O, NOT NULL) propagate unchanged
//!   inside `RepoError::Db`.
//! - Unknown ids are soft: empty lists, `None`, or a `false` change flag.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::exercise::{Exercise, ExerciseSummary, NewExercise};
use crate::model::session::{ExerciseLog, NewExerciseLog, SessionSummary, WorkoutSession};
use crate::model::template::{NewTemplateExercise, TemplateExercise, WorkoutTemplate};
use crate::model::{ExerciseId, LogId, SessionId, TemplateExerciseId, TemplateId};
use crate::repo::exercise_repo::{DeleteOutcome, ExerciseRepository, SqliteExerciseRepository};
use crate::repo::session_repo::{SessionRepository, SqliteSessionRepository};
use crate::repo::template_repo::{SqliteTemplateRepository, TemplateRepository};
use crate::repo::RepoResult;
use log::{debug, info, warn};
use rusqlite::Connection;
use std::path::Path;

/// Owned handle to the workout database.
///
/// Pass it by reference to whatever needs data access; there is no global
/// connection.
pub struct WorkoutStore {
    conn: Connection,
}

impl WorkoutStore {
    /// Opens the database file, creating schema and seed rows when the file
    /// does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a fresh, seeded in-memory database.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Closes the connection, reporting any error from the engine.
    pub fn close(self) -> DbResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=store status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                warn!("event=db_close module=store status=error error={}", err);
                Err(DbError::Sqlite(err))
            }
        }
    }

    /// Borrows the underlying connection for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn exercises(&self) -> SqliteExerciseRepository<'_> {
        SqliteExerciseRepository::new(&self.conn)
    }

    fn templates(&self) -> SqliteTemplateRepository<'_> {
        SqliteTemplateRepository::new(&self.conn)
    }

    fn sessions(&self) -> SqliteSessionRepository<'_> {
        SqliteSessionRepository::new(&self.conn)
    }

    /// Lists all exercises ordered by id.
    pub fn list_exercises(&self) -> RepoResult<Vec<ExerciseSummary>> {
        self.exercises().list_exercises()
    }

    /// Filters the exercise library by name, muscle group or equipment.
    ///
    /// Blank `text` lists everything.
    pub fn search_exercises(&self, text: &str) -> RepoResult<Vec<ExerciseSummary>> {
        self.exercises().search_exercises(text)
    }

    pub fn get_exercise(&self, id: ExerciseId) -> RepoResult<Option<Exercise>> {
        self.exercises().get_exercise(id)
    }

    /// Inserts an exercise and returns its id. Duplicate names are allowed.
    pub fn add_exercise(
        &self,
        name: &str,
        muscle_group: &str,
        equipment: Option<&str>,
        description: Option<&str>,
    ) -> RepoResult<ExerciseId> {
        let exercise = NewExercise::new(
            name,
            muscle_group,
            equipment.map(str::to_string),
            description.map(str::to_string),
        );
        self.insert_exercise(&exercise)
    }

    /// Inserts an already assembled exercise record.
    pub fn insert_exercise(&self, exercise: &NewExercise) -> RepoResult<ExerciseId> {
        let id = self.exercises().create_exercise(exercise)?;
        debug!("event=exercise_add module=store status=ok exercise_id={id}");
        Ok(id)
    }

    /// Replaces all attributes of an exercise; `false` if the id is unknown.
    pub fn update_exercise(&self, id: ExerciseId, exercise: &NewExercise) -> RepoResult<bool> {
        let changed = self.exercises().update_exercise(id, exercise)?;
        debug!("event=exercise_update module=store status=ok exercise_id={id} changed={changed}");
        Ok(changed)
    }

    /// Deletes an exercise unless a template link or set log references it.
    pub fn delete_exercise(&self, id: ExerciseId) -> RepoResult<DeleteOutcome> {
        let outcome = self.exercises().delete_exercise(id)?;
        debug!("event=exercise_delete module=store status=ok exercise_id={id} outcome={outcome:?}");
        Ok(outcome)
    }

    /// Lists all workout templates ordered by id.
    pub fn list_workout_templates(&self) -> RepoResult<Vec<WorkoutTemplate>> {
        self.templates().list_templates()
    }

    pub fn get_workout_template(&self, id: TemplateId) -> RepoResult<Option<WorkoutTemplate>> {
        self.templates().get_template(id)
    }

    /// Creates an empty template dated today.
    pub fn create_workout_template(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> RepoResult<TemplateId> {
        let id = self.templates().create_template(name, description)?;
        debug!("event=template_create module=store status=ok workout_id={id}");
        Ok(id)
    }

    /// Appends an exercise prescription to a template.
    pub fn add_exercise_to_template(
        &self,
        workout_id: TemplateId,
        exercise_id: ExerciseId,
        sets: i64,
        reps: &str,
        rest_time: Option<i64>,
    ) -> RepoResult<TemplateExerciseId> {
        let link = NewTemplateExercise {
            workout_id,
            exercise_id,
            sets,
            reps: reps.to_string(),
            rest_time,
        };
        let id = self.templates().add_template_exercise(&link)?;
        debug!(
            "event=template_add_exercise module=store status=ok workout_id={workout_id} exercise_id={exercise_id}"
        );
        Ok(id)
    }

    /// Lists the exercises prescribed by a template.
    ///
    /// An unknown template yields an empty list, not an error.
    pub fn get_workout_exercises(
        &self,
        workout_id: TemplateId,
    ) -> RepoResult<Vec<TemplateExercise>> {
        self.templates().list_template_exercises(workout_id)
    }

    /// Starts a session for a template and returns its id.
    ///
    /// The template id is not checked; an unknown one is stored as given.
    pub fn start_workout_session(&self, workout_id: TemplateId) -> RepoResult<SessionId> {
        let id = self.sessions().start_session(workout_id)?;
        info!("event=session_start module=store status=ok session_id={id} workout_id={workout_id}");
        Ok(id)
    }

    /// Records end time and notes on an active session.
    ///
    /// Returns `false` without error when the id is unknown or the session
    /// was already completed.
    pub fn complete_workout_session(
        &self,
        session_id: SessionId,
        notes: Option<&str>,
    ) -> RepoResult<bool> {
        let completed = self.sessions().complete_session(session_id, notes)?;
        if completed {
            info!("event=session_complete module=store status=ok session_id={session_id}");
        } else {
            warn!("event=session_complete module=store status=noop session_id={session_id}");
        }
        Ok(completed)
    }

    pub fn get_workout_session(&self, id: SessionId) -> RepoResult<Option<WorkoutSession>> {
        self.sessions().get_session(id)
    }

    /// Newest sessions first, joined with their template names.
    pub fn list_recent_sessions(&self, limit: u32) -> RepoResult<Vec<SessionSummary>> {
        self.sessions().list_recent_sessions(limit)
    }

    /// Appends one performed set to a session and returns the log id.
    ///
    /// Ids and `set_number` are stored as given without any checks.
    pub fn log_exercise_set(
        &self,
        session_id: SessionId,
        exercise_id: ExerciseId,
        set_number: i64,
        weight: Option<f64>,
        reps: Option<i64>,
        completed: bool,
    ) -> RepoResult<LogId> {
        let log = NewExerciseLog {
            session_id,
            exercise_id,
            set_number,
            weight,
            reps,
            completed,
        };
        let id = self.sessions().log_set(&log)?;
        debug!(
            "event=set_log module=store status=ok session_id={session_id} exercise_id={exercise_id} set_number={set_number}"
        );
        Ok(id)
    }

    /// Lists the sets logged in a session in insertion order.
    pub fn list_session_logs(&self, session_id: SessionId) -> RepoResult<Vec<ExerciseLog>> {
        self.sessions().list_session_logs(session_id)
    }
}

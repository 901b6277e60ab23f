//! Workout session and exercise log repository.
//!
//! # Invariants
//! - `complete_session` only touches sessions whose `end_time` is unset, so a
//!   completed session keeps its first end time and notes.
//! - Logs are insert-only and listed by `id ASC`.
//! - Recent sessions are listed by `start_time DESC, id DESC`, including
//!   sessions whose template is missing.

use crate::clock;
use crate::model::session::{ExerciseLog, NewExerciseLog, SessionSummary, WorkoutSession};
use crate::model::{LogId, SessionId, TemplateId};
use crate::repo::{
    bool_to_int, decode_bool, decode_optional_timestamp, decode_timestamp, RepoResult,
};
use rusqlite::{params, Connection, Row};

/// Repository interface for session lifecycle and set logging.
pub trait SessionRepository {
    /// Inserts an active session starting now.
    fn start_session(&self, workout_id: TemplateId) -> RepoResult<SessionId>;
    /// Stamps end time and notes; `false` when nothing matched.
    fn complete_session(&self, id: SessionId, notes: Option<&str>) -> RepoResult<bool>;
    fn get_session(&self, id: SessionId) -> RepoResult<Option<WorkoutSession>>;
    fn list_recent_sessions(&self, limit: u32) -> RepoResult<Vec<SessionSummary>>;
    fn log_set(&self, log: &NewExerciseLog) -> RepoResult<LogId>;
    fn list_session_logs(&self, session_id: SessionId) -> RepoResult<Vec<ExerciseLog>>;
}

/// SQLite-backed session repository.
pub struct SqliteSessionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSessionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SessionRepository for SqliteSessionRepository<'_> {
    fn start_session(&self, workout_id: TemplateId) -> RepoResult<SessionId> {
        self.conn.execute(
            "INSERT INTO workout_sessions (workout_id, start_time)
             VALUES (?1, ?2);",
            params![workout_id, clock::format_timestamp(clock::now())],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn complete_session(&self, id: SessionId, notes: Option<&str>) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE workout_sessions
             SET
                end_time = ?1,
                notes = ?2
             WHERE id = ?3
               AND end_time IS NULL;",
            params![clock::format_timestamp(clock::now()), notes, id],
        )?;
        Ok(changed > 0)
    }

    fn get_session(&self, id: SessionId) -> RepoResult<Option<WorkoutSession>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, workout_id, start_time, end_time, notes
             FROM workout_sessions
             WHERE id = ?1;",
        )?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_session_row(row)?));
        }
        Ok(None)
    }

    fn list_recent_sessions(&self, limit: u32) -> RepoResult<Vec<SessionSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                s.id,
                s.workout_id,
                s.start_time,
                s.end_time,
                s.notes,
                t.name AS workout_name
             FROM workout_sessions s
             LEFT JOIN workout_templates t ON t.id = s.workout_id
             ORDER BY s.start_time DESC, s.id DESC
             LIMIT ?1;",
        )?;
        let mut rows = stmt.query([i64::from(limit)])?;
        let mut sessions = Vec::new();
        while let Some(row) = rows.next()? {
            let session = parse_session_row(row)?;
            sessions.push(SessionSummary {
                session_id: session.id,
                workout_id: session.workout_id,
                workout_name: row.get("workout_name")?,
                start_time: session.start_time,
                end_time: session.end_time,
                duration_seconds: session.duration_seconds(),
            });
        }
        Ok(sessions)
    }

    fn log_set(&self, log: &NewExerciseLog) -> RepoResult<LogId> {
        self.conn.execute(
            "INSERT INTO exercise_logs (
                session_id,
                exercise_id,
                set_number,
                weight,
                reps,
                completed
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                log.session_id,
                log.exercise_id,
                log.set_number,
                log.weight,
                log.reps,
                bool_to_int(log.completed),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_session_logs(&self, session_id: SessionId) -> RepoResult<Vec<ExerciseLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, session_id, exercise_id, set_number, weight, reps, completed
             FROM exercise_logs
             WHERE session_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([session_id])?;
        let mut logs = Vec::new();
        while let Some(row) = rows.next()? {
            logs.push(ExerciseLog {
                id: row.get("id")?,
                session_id: row.get("session_id")?,
                exercise_id: row.get("exercise_id")?,
                set_number: row.get("set_number")?,
                weight: row.get("weight")?,
                reps: row.get("reps")?,
                completed: decode_bool("exercise_logs.completed", row.get("completed")?)?,
            });
        }
        Ok(logs)
    }
}

fn parse_session_row(row: &Row<'_>) -> RepoResult<WorkoutSession> {
    let start_text: String = row.get("start_time")?;
    Ok(WorkoutSession {
        id: row.get("id")?,
        workout_id: row.get("workout_id")?,
        start_time: decode_timestamp("workout_sessions.start_time", &start_text)?,
        end_time: decode_optional_timestamp("workout_sessions.end_time", row.get("end_time")?)?,
        notes: row.get("notes")?,
    })
}

//! Exercise library repository.
//!
//! # Invariants
//! - Lists are ordered by `id ASC`.
//! - Names are not unique; duplicates are stored as separate rows.
//! - An exercise still referenced by a template link or a set log is never
//!   deleted; nothing cascades.

use crate::model::exercise::{Exercise, ExerciseSummary, NewExercise};
use crate::model::ExerciseId;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// Referenced by a template link or a set log; the row was kept.
    InUse,
}

/// Repository interface for exercise library operations.
pub trait ExerciseRepository {
    fn list_exercises(&self) -> RepoResult<Vec<ExerciseSummary>>;
    /// Case-insensitive substring match on name, muscle group or equipment.
    fn search_exercises(&self, text: &str) -> RepoResult<Vec<ExerciseSummary>>;
    fn get_exercise(&self, id: ExerciseId) -> RepoResult<Option<Exercise>>;
    fn create_exercise(&self, exercise: &NewExercise) -> RepoResult<ExerciseId>;
    /// Returns `false` when no row has the given id.
    fn update_exercise(&self, id: ExerciseId, exercise: &NewExercise) -> RepoResult<bool>;
    fn delete_exercise(&self, id: ExerciseId) -> RepoResult<DeleteOutcome>;
}

/// SQLite-backed exercise repository.
pub struct SqliteExerciseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExerciseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ExerciseRepository for SqliteExerciseRepository<'_> {
    fn list_exercises(&self) -> RepoResult<Vec<ExerciseSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, muscle_group, equipment
             FROM exercises
             ORDER BY id ASC;",
        )?;
        let rows = stmt.query_map([], parse_summary_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn search_exercises(&self, text: &str) -> RepoResult<Vec<ExerciseSummary>> {
        let needle = text.trim();
        if needle.is_empty() {
            return self.list_exercises();
        }

        let pattern = format!("%{}%", escape_like(needle));
        let mut stmt = self.conn.prepare(
            "SELECT id, name, muscle_group, equipment
             FROM exercises
             WHERE name LIKE ?1 ESCAPE '\\'
                OR muscle_group LIKE ?1 ESCAPE '\\'
                OR equipment LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC;",
        )?;
        let rows = stmt.query_map([pattern], parse_summary_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn get_exercise(&self, id: ExerciseId) -> RepoResult<Option<Exercise>> {
        let exercise = self
            .conn
            .query_row(
                "SELECT id, name, muscle_group, equipment, description
                 FROM exercises
                 WHERE id = ?1;",
                [id],
                |row| {
                    Ok(Exercise {
                        id: row.get("id")?,
                        name: row.get("name")?,
                        muscle_group: row.get("muscle_group")?,
                        equipment: row.get("equipment")?,
                        description: row.get("description")?,
                    })
                },
            )
            .optional()?;
        Ok(exercise)
    }

    fn create_exercise(&self, exercise: &NewExercise) -> RepoResult<ExerciseId> {
        self.conn.execute(
            "INSERT INTO exercises (name, muscle_group, equipment, description)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                exercise.name.as_str(),
                exercise.muscle_group.as_str(),
                exercise.equipment.as_deref(),
                exercise.description.as_deref(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_exercise(&self, id: ExerciseId, exercise: &NewExercise) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE exercises
             SET
                name = ?1,
                muscle_group = ?2,
                equipment = ?3,
                description = ?4
             WHERE id = ?5;",
            params![
                exercise.name.as_str(),
                exercise.muscle_group.as_str(),
                exercise.equipment.as_deref(),
                exercise.description.as_deref(),
                id,
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete_exercise(&self, id: ExerciseId) -> RepoResult<DeleteOutcome> {
        let tx = self.conn.unchecked_transaction()?;
        let referenced: bool = tx.query_row(
            "SELECT
                EXISTS(SELECT 1 FROM workout_exercises WHERE exercise_id = ?1)
                OR EXISTS(SELECT 1 FROM exercise_logs WHERE exercise_id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        if referenced {
            return Ok(DeleteOutcome::InUse);
        }

        let changed = tx.execute("DELETE FROM exercises WHERE id = ?1;", [id])?;
        tx.commit()?;
        Ok(if changed > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        })
    }
}

fn parse_summary_row(row: &Row<'_>) -> rusqlite::Result<ExerciseSummary> {
    Ok(ExerciseSummary {
        id: row.get("id")?,
        name: row.get("name")?,
        muscle_group: row.get("muscle_group")?,
        equipment: row.get("equipment")?,
    })
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

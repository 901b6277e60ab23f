//! Workout template repository.
//!
//! # Invariants
//! - Templates are listed by `id ASC`; template exercises by link id.
//! - Listing exercises of an unknown template yields an empty list.

use crate::clock;
use crate::model::template::{NewTemplateExercise, TemplateExercise, WorkoutTemplate};
use crate::model::{TemplateExerciseId, TemplateId};
use crate::repo::{decode_date, RepoResult};
use rusqlite::{params, Connection, Row};

const TEMPLATE_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    created_date
FROM workout_templates";

/// Repository interface for workout templates and their exercise links.
pub trait TemplateRepository {
    fn list_templates(&self) -> RepoResult<Vec<WorkoutTemplate>>;
    fn get_template(&self, id: TemplateId) -> RepoResult<Option<WorkoutTemplate>>;
    /// Inserts a template stamped with today's date.
    fn create_template(&self, name: &str, description: Option<&str>) -> RepoResult<TemplateId>;
    fn add_template_exercise(&self, link: &NewTemplateExercise)
        -> RepoResult<TemplateExerciseId>;
    fn list_template_exercises(&self, workout_id: TemplateId)
        -> RepoResult<Vec<TemplateExercise>>;
}

/// SQLite-backed template repository.
pub struct SqliteTemplateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTemplateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TemplateRepository for SqliteTemplateRepository<'_> {
    fn list_templates(&self) -> RepoResult<Vec<WorkoutTemplate>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEMPLATE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut templates = Vec::new();
        while let Some(row) = rows.next()? {
            templates.push(parse_template_row(row)?);
        }
        Ok(templates)
    }

    fn get_template(&self, id: TemplateId) -> RepoResult<Option<WorkoutTemplate>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEMPLATE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_template_row(row)?));
        }
        Ok(None)
    }

    fn create_template(&self, name: &str, description: Option<&str>) -> RepoResult<TemplateId> {
        self.conn.execute(
            "INSERT INTO workout_templates (name, description, created_date)
             VALUES (?1, ?2, ?3);",
            params![name, description, clock::format_date(clock::today())],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn add_template_exercise(
        &self,
        link: &NewTemplateExercise,
    ) -> RepoResult<TemplateExerciseId> {
        self.conn.execute(
            "INSERT INTO workout_exercises (workout_id, exercise_id, sets, reps, rest_time)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                link.workout_id,
                link.exercise_id,
                link.sets,
                link.reps.as_str(),
                link.rest_time,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_template_exercises(
        &self,
        workout_id: TemplateId,
    ) -> RepoResult<Vec<TemplateExercise>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                e.id AS exercise_id,
                e.name AS exercise_name,
                e.muscle_group,
                we.sets,
                we.reps,
                we.rest_time
             FROM exercises e
             INNER JOIN workout_exercises we ON e.id = we.exercise_id
             WHERE we.workout_id = ?1
             ORDER BY we.id ASC;",
        )?;
        let rows = stmt.query_map([workout_id], |row| {
            Ok(TemplateExercise {
                exercise_id: row.get("exercise_id")?,
                exercise_name: row.get("exercise_name")?,
                muscle_group: row.get("muscle_group")?,
                sets: row.get("sets")?,
                reps: row.get("reps")?,
                rest_time: row.get("rest_time")?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn parse_template_row(row: &Row<'_>) -> RepoResult<WorkoutTemplate> {
    let created_text: String = row.get("created_date")?;
    Ok(WorkoutTemplate {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        created_date: decode_date("workout_templates.created_date", &created_text)?,
    })
}

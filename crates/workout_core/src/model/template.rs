//! Workout template records.
//!
//! A template is a reusable plan; performed workouts are sessions.

use super::{ExerciseId, TemplateId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: TemplateId,
    pub name: String,
    pub description: Option<String>,
    /// Local calendar date the template was created.
    pub created_date: NaiveDate,
}

/// One prescribed exercise of a template, joined with exercise details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub exercise_id: ExerciseId,
    pub exercise_name: String,
    pub muscle_group: String,
    pub sets: i64,
    /// Free-text rep range such as `8-10`.
    pub reps: String,
    /// Rest between sets in seconds.
    pub rest_time: Option<i64>,
}

/// Link row written when an exercise is added to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTemplateExercise {
    pub workout_id: TemplateId,
    pub exercise_id: ExerciseId,
    pub sets: i64,
    pub reps: String,
    pub rest_time: Option<i64>,
}

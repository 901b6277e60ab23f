//! Workout session and set log records.
//!
//! # Invariants
//! - A session is `Active` until `end_time` is set, then `Completed` for good.
//! - Logs are append-only; set numbers are caller supplied and unchecked.

use super::{ExerciseId, LogId, SessionId, TemplateId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state derived from `end_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Started, end time not recorded yet.
    Active,
    /// End time recorded. Terminal.
    Completed,
}

/// One performance of a workout template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: SessionId,
    pub workout_id: TemplateId,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl WorkoutSession {
    pub fn state(&self) -> SessionState {
        match self.end_time {
            Some(_) => SessionState::Completed,
            None => SessionState::Active,
        }
    }

    /// Whole seconds between start and end, once completed.
    pub fn duration_seconds(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).num_seconds())
    }
}

/// History row: a session with the name of the template it performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub workout_id: TemplateId,
    /// `None` when the session's template no longer exists.
    pub workout_name: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_seconds: Option<i64>,
}

/// One recorded set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: LogId,
    pub session_id: SessionId,
    pub exercise_id: ExerciseId,
    pub set_number: i64,
    pub weight: Option<f64>,
    pub reps: Option<i64>,
    pub completed: bool,
}

/// Set data written by `log_exercise_set`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExerciseLog {
    pub session_id: SessionId,
    pub exercise_id: ExerciseId,
    pub set_number: i64,
    pub weight: Option<f64>,
    pub reps: Option<i64>,
    pub completed: bool,
}

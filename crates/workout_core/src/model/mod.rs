//! Domain records for the workout tracker.
//!
//! # Responsibility
//! - Define named records for every persisted entity.
//! - Hold form-level validation used by presentation code.
//!
//! # Invariants
//! - Every entity is identified by an integer id assigned on insert.
//! - Sessions and logs are never deleted by core.

pub mod exercise;
pub mod session;
pub mod template;

/// Row id of an `exercises` row.
pub type ExerciseId = i64;
/// Row id of a `workout_templates` row.
pub type TemplateId = i64;
/// Row id of a `workout_sessions` row.
pub type SessionId = i64;
/// Row id of an `exercise_logs` row.
pub type LogId = i64;
/// Row id of a `workout_exercises` row.
pub type TemplateExerciseId = i64;

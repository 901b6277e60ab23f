//! Schema definition for the five workout tables.
//!
//! # Invariants
//! - Schema and seed rows are written in one transaction.
//! - Column sets match files written by earlier releases of the tracker.

use super::seed::insert_sample_data;
use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables created on first open, in dependency order.
pub const TABLE_NAMES: &[&str] = &[
    "exercises",
    "workout_templates",
    "workout_exercises",
    "workout_sessions",
    "exercise_logs",
];

/// Creates all tables and inserts seed rows atomically.
pub fn initialize_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    insert_sample_data(&tx)?;
    tx.commit()?;
    Ok(())
}

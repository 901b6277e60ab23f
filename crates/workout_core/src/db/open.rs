//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Create schema and seed rows for databases opened for the first time.
//!
//! # Invariants
//! - Foreign keys are declared in the schema but not enforced
//!   (`foreign_keys=OFF`); unknown ids are stored as given.
//! - A new file whose bootstrap fails is removed again, so the next open
//!   starts from scratch instead of trusting a half-built file.

use super::schema::initialize_schema;
use super::DbResult;
use log::{error, info, warn};
use rusqlite::Connection;
use std::path::Path;

type SchemaInit = fn(&mut Connection) -> DbResult<()>;
use std::time::Instant;

/// Opens a SQLite database file, creating and seeding it when missing.
///
/// # Side effects
/// - Creates the file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with(path.as_ref(), initialize_schema)
}

fn open_db_with(path: &Path, init: SchemaInit) -> DbResult<Connection> {
    let started_at = Instant::now();
    let is_new = !path.try_exists()?;
    info!("event=db_open module=db status=start mode=file new_file={is_new}");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn, is_new.then_some(init)) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file new_file={} duration_ms={}",
                is_new,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            if is_new {
                drop(conn);
                discard_new_file(path);
            }
            Err(err)
        }
    }
}

/// Opens an in-memory SQLite database with schema and seed rows.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let mut conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn, Some(initialize_schema)) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, init: Option<SchemaInit>) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    if let Some(init) = init {
        init(conn)?;
    }
    Ok(())
}

fn discard_new_file(path: &Path) {
    if let Err(err) = std::fs::remove_file(path) {
        warn!(
            "event=db_discard module=db status=error error_code=db_discard_failed error={}",
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::open_db_with;
    use crate::db::DbResult;
    use rusqlite::Connection;

    fn failing_schema(conn: &mut Connection) -> DbResult<()> {
        conn.execute_batch("CREATE TABLE exercises (id INTEGER PRIMARY KEY);")?;
        conn.execute_batch("INSERT INTO no_such_table VALUES (1);")?;
        Ok(())
    }

    #[test]
    fn failed_schema_step_removes_the_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workout_data.db");

        assert!(open_db_with(&path, failing_schema).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn failed_schema_step_leaves_existing_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workout_data.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE kept (id INTEGER PRIMARY KEY);")
            .unwrap();

        let conn = open_db_with(&path, failing_schema).unwrap();
        let kept: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'kept';",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(kept, 1);
    }
}

use rusqlite::Connection;
use workout_core::db::schema::TABLE_NAMES;
use workout_core::db::{open_db, open_db_in_memory};
use workout_core::{clock, WorkoutStore};

#[test]
fn opening_missing_file_creates_schema_and_seed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workout_data.db");
    assert!(!path.exists());

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    for table in TABLE_NAMES {
        assert_table_exists(&conn, table);
    }
    assert_eq!(count(&conn, "exercises"), 6);
    assert_eq!(count(&conn, "workout_templates"), 1);
    assert_eq!(count(&conn, "workout_exercises"), 4);
    assert_eq!(count(&conn, "workout_sessions"), 0);
    assert_eq!(count(&conn, "exercise_logs"), 0);
}

#[test]
fn reopening_existing_file_does_not_seed_again() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workout_data.db");

    let store = WorkoutStore::open(&path).unwrap();
    store
        .add_exercise("Lunge", "Legs", Some("Body weight"), None)
        .unwrap();
    store.close().unwrap();

    let conn = open_db(&path).unwrap();
    assert_eq!(count(&conn, "exercises"), 7);
    assert_eq!(count(&conn, "workout_templates"), 1);
    assert_eq!(count(&conn, "workout_exercises"), 4);
}

#[test]
fn existing_file_is_trusted_without_schema_checks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    let legacy = Connection::open(&path).unwrap();
    legacy
        .execute_batch("CREATE TABLE unrelated (id INTEGER PRIMARY KEY);")
        .unwrap();
    drop(legacy);

    let conn = open_db(&path).unwrap();
    assert_table_exists(&conn, "unrelated");
    let exercises_present: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'exercises';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exercises_present, 0);
}

#[test]
fn foreign_keys_are_declared_but_not_enforced() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 0);

    let declared: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_foreign_key_list('exercise_logs');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(declared, 2);
}

#[test]
fn seed_template_is_dated_today() {
    let conn = open_db_in_memory().unwrap();
    let (name, created): (String, String) = conn
        .query_row(
            "SELECT name, created_date FROM workout_templates;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(name, "Full Body Workout");
    assert_eq!(created, clock::format_date(clock::today()));
}

#[test]
fn opening_path_in_missing_directory_fails_without_leaving_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("workout_data.db");

    assert!(WorkoutStore::open(&path).is_err());
    assert!(!path.exists());
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

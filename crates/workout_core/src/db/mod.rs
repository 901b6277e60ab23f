//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open and configure the single SQLite connection used by the store.
//! - Create the schema and seed rows when the database file is new.
//!
//! # Invariants
//! - Schema creation runs only for a file that did not exist before open.
//! - An existing file is trusted as-is; no version check is performed.
//! - Foreign keys are declared, not enforced: every connection runs with
//!   `foreign_keys=OFF`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
mod seed;

pub use open::{open_db, open_db_in_memory};

/// Default database file name, resolved against the working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "workout_data.db";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    Io(std::io::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "database file error: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<std::io::Error> for DbError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

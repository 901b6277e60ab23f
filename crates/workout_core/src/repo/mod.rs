//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define narrow data access contracts per entity family.
//! - Isolate SQL details from the store facade.
//!
//! # Invariants
//! - Repositories perform no domain validation. Foreign keys are declared
//!   but not enforced, so referenced ids are stored as given.
//! - Unknown ids never produce an error: reads return `None`/empty and
//!   updates report `false`.
//! - Read paths reject undecodable persisted values instead of masking them.

pub mod exercise_repo;
pub mod session_repo;
pub mod template_repo;

use crate::clock;
use crate::db::DbError;
use chrono::{NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

fn decode_date(column: &str, value: &str) -> RepoResult<NaiveDate> {
    clock::parse_date(value)
        .ok_or_else(|| RepoError::InvalidData(format!("invalid date `{value}` in {column}")))
}

fn decode_timestamp(column: &str, value: &str) -> RepoResult<NaiveDateTime> {
    clock::parse_timestamp(value)
        .ok_or_else(|| RepoError::InvalidData(format!("invalid timestamp `{value}` in {column}")))
}

fn decode_optional_timestamp(
    column: &str,
    value: Option<String>,
) -> RepoResult<Option<NaiveDateTime>> {
    value
        .map(|text| decode_timestamp(column, &text))
        .transpose()
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

fn decode_bool(column: &str, value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in {column}"
        ))),
    }
}

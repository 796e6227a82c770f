//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-entity persistence contracts consumed by the service layer.
//! - Isolate SQLite query details from domain and service code.
//!
//! # Invariants
//! - Write paths must call the entity's `validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

use crate::db::DbError;
use crate::model::outcome::ValidationFailure;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
pub mod product_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by department and product persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationFailure),
    Db(DbError),
    NotFound { entity: &'static str, id: i64 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid entity state: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationFailure> for RepoError {
    fn from(value: ValidationFailure) -> Self {
        Self::Validation(value)
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

/// Maps the "not yet assigned" id `0` to `NULL` so SQLite assigns a rowid.
pub(crate) fn insert_id(id: i64) -> Option<i64> {
    (id != 0).then_some(id)
}

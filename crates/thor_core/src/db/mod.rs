//! Catalog database: connection setup and the departments/products schema.
//!
//! # Responsibility
//! - Hand out connections with foreign keys on, so deleting a department
//!   clears `products.department_id` instead of leaving a dangling id.
//! - Bring the `departments` and `products` tables up to the schema this
//!   build understands before any repository touches them.
//!
//! # Invariants
//! - Every connection returned by `open_db*` is fully migrated.
//! - A catalog file written by a newer build is refused, never downgraded.
//!
//! # See also
//! - `migrations/0001_init.sql` for the table and constraint definitions.
//! - `crate::repo::department_repo` and `crate::repo::product_repo` for the
//!   row mappings over these tables.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to open or migrate the catalog database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "catalog schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

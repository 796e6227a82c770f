//! Catalog schema versions.
//!
//! Each entry upgrades the catalog by one step and records the step in
//! `PRAGMA user_version`. Version 1 creates `departments`, `products` and
//! the `products.department_id` index; later versions append below it.
//!
//! # See also
//! - `0001_init.sql` for the version 1 tables.
//! - `crate::db::open` for where upgrades run on every open.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_init.sql"),
    },
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Upgrades the catalog on `conn` to [`latest_version`].
///
/// Pending steps run in one transaction, so a failed step leaves the
/// catalog at its previous version.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version = current_user_version(conn)?;
    let to_version = latest_version();

    if from_version > to_version {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: to_version,
        });
    }
    if from_version == to_version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in pending(from_version) {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={from_version} to_version={to_version}"
    );
    Ok(())
}

fn pending(applied: u32) -> impl Iterator<Item = &'static Migration> {
    MIGRATIONS
        .iter()
        .filter(move |migration| migration.version > applied)
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::{latest_version, pending, MIGRATIONS};

    #[test]
    fn versions_start_at_one_and_increase_by_one() {
        for (index, migration) in MIGRATIONS.iter().enumerate() {
            assert_eq!(migration.version as usize, index + 1);
        }
        assert_eq!(latest_version() as usize, MIGRATIONS.len());
    }

    #[test]
    fn fresh_catalog_runs_every_step_and_current_runs_none() {
        assert_eq!(pending(0).count(), MIGRATIONS.len());
        assert_eq!(pending(latest_version()).count(), 0);
    }

    #[test]
    fn initial_step_creates_catalog_tables() {
        let sql = MIGRATIONS[0].sql;
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS departments"));
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS products"));
    }
}

//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `departments` table.
//! - Hand back fully formed `Department` values, with storage-assigned ids
//!   populated on insert.
//!
//! # Invariants
//! - Write paths call `Department::validate()` before SQL mutations.
//! - Deleting a department clears product references (`ON DELETE SET NULL`).

use crate::model::department::{Department, DepartmentId};
use crate::repo::{insert_id, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name FROM departments";

/// Repository interface for department persistence.
pub trait DepartmentRepository {
    fn get_all(&self) -> RepoResult<Vec<Department>>;
    fn get_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    fn add(&self, department: &Department) -> RepoResult<Department>;
    fn update(&self, department: &Department) -> RepoResult<Department>;
    fn delete(&self, id: DepartmentId) -> RepoResult<bool>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }

    fn get_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn add(&self, department: &Department) -> RepoResult<Department> {
        department.validate()?;

        self.conn.execute(
            "INSERT INTO departments (id, name) VALUES (?1, ?2);",
            params![insert_id(department.id()), department.name()],
        )?;

        Ok(department.clone().with_id(self.conn.last_insert_rowid()))
    }

    fn update(&self, department: &Department) -> RepoResult<Department> {
        department.validate()?;

        let changed = self.conn.execute(
            "UPDATE departments SET name = ?1 WHERE id = ?2;",
            params![department.name(), department.id()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "department",
                id: department.id(),
            });
        }

        Ok(department.clone())
    }

    fn delete(&self, id: DepartmentId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    let department = Department::from_parts(row.get("id")?, row.get("name")?);
    department.validate()?;
    Ok(department)
}

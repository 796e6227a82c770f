//! Department domain model.
//!
//! # Responsibility
//! - Define the catalog grouping that products reference.
//! - Build and rename departments through validated operations only.
//!
//! # Invariants
//! - `id` never changes after construction.
//! - A successful `update` never leaves `name` empty.
//! - Persisted and deserialized departments must pass `validate()`.

use crate::model::outcome::{Outcome, ValidationFailure};
use crate::model::rules::{run_rules, Rule};
use serde::{Deserialize, Serialize};

/// Storage identity of a department. `0` means not yet assigned.
pub type DepartmentId = i64;

/// Catalog department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DepartmentRecord")]
pub struct Department {
    id: DepartmentId,
    name: String,
}

#[derive(Deserialize)]
struct DepartmentRecord {
    id: DepartmentId,
    name: String,
}

impl TryFrom<DepartmentRecord> for Department {
    type Error = ValidationFailure;

    fn try_from(value: DepartmentRecord) -> Result<Self, Self::Error> {
        let department = Self {
            id: value.id,
            name: value.name,
        };
        department.validate()?;
        Ok(department)
    }
}

impl Department {
    /// Builds a department.
    ///
    /// No business rules are enforced yet, so this always succeeds. Use
    /// [`Department::new_with_rules`] to inject checks.
    pub fn new(id: DepartmentId, name: impl Into<String>) -> Outcome<Department> {
        Self::new_with_rules(id, name, &[])
    }

    /// Builds a department and runs `rules` before reporting success.
    pub fn new_with_rules(
        id: DepartmentId,
        name: impl Into<String>,
        rules: &[Rule<Department>],
    ) -> Outcome<Department> {
        let department = Self {
            id,
            name: name.into(),
        };

        if let Err(failure) = run_rules(&department, rules) {
            return failure.into();
        }

        Outcome::with_value("department created", department)
    }

    /// Rebuilds a department from trusted storage columns.
    pub(crate) fn from_parts(id: DepartmentId, name: String) -> Self {
        Self { id, name }
    }

    pub(crate) fn with_id(mut self, id: DepartmentId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> DepartmentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the department.
    ///
    /// Fails without touching state when `name` is absent or empty.
    pub fn update(&mut self, name: Option<&str>) -> Outcome {
        let Some(name) = name.filter(|value| !value.is_empty()) else {
            return ValidationFailure::NameRequired.into();
        };

        self.name = name.to_string();
        Outcome::success("department updated")
    }

    /// Checks the steady-state invariant required before persistence.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if self.name.is_empty() {
            return Err(ValidationFailure::NameRequired);
        }
        Ok(())
    }
}

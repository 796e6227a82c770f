//! Business-rule hook for entity factories.
//!
//! No rules are enforced yet. Factories accept a slice of rule checks so
//! callers can plug rules in without changing entity code.

use crate::model::outcome::ValidationFailure;

/// A rule check over a freshly built entity. `Err` holds the user-facing reason.
pub type Rule<E> = fn(&E) -> Result<(), String>;

/// Runs `rules` in order and stops at the first violation.
pub fn run_rules<E>(entity: &E, rules: &[Rule<E>]) -> Result<(), ValidationFailure> {
    for rule in rules {
        rule(entity).map_err(ValidationFailure::RuleViolated)?;
    }
    Ok(())
}

//! Catalog domain model.
//!
//! # Responsibility
//! - Define departments and products with their validated operations.
//! - Define the `Outcome` convention every constructing/mutating operation
//!   reports through.
//!
//! # Invariants
//! - Entity state is private and changes only through named operations.
//! - Expected business failures are `Outcome::Failure`, never `Err` or panic.
//! - Entities do not log; callers decide what to surface.

pub mod department;
pub mod outcome;
pub mod product;
pub mod rules;

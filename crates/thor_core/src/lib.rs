//! Core domain logic for the Thor catalog.
//! This crate is the single source of truth for department/product invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId};
pub use model::outcome::{FailureKind, Outcome, OutcomeFailure, ValidationFailure};
pub use model::product::{Product, ProductId};
pub use model::rules::Rule;
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use repo::{RepoError, RepoResult};
pub use service::catalog_service::CatalogService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `thor_core` wiring end to end: open storage, create a department
//!   and a product, link them, read them back.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Uses `THOR_DB_PATH` when set, otherwise an in-memory database. Writes
//! core logs under `THOR_LOG_DIR` (absolute path) when set.

use rust_decimal::Decimal;
use std::process::ExitCode;
use thor_core::db::{open_db, open_db_in_memory};
use thor_core::{CatalogService, RepoResult, SqliteDepartmentRepository, SqliteProductRepository};

const DB_PATH_ENV: &str = "THOR_DB_PATH";
const LOG_DIR_ENV: &str = "THOR_LOG_DIR";

fn main() -> ExitCode {
    println!("thor_core ping={}", thor_core::ping());
    println!("thor_core version={}", thor_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = thor_core::init_logging(thor_core::default_log_level(), &log_dir) {
            eprintln!("failed to initialize logging: {err}");
            return ExitCode::FAILURE;
        }
    }

    let conn = match std::env::var_os(DB_PATH_ENV) {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open catalog database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = CatalogService::new(
        SqliteDepartmentRepository::new(&conn),
        SqliteProductRepository::new(&conn),
    );

    match run_smoke(&service) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("smoke run failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_smoke(
    service: &CatalogService<SqliteDepartmentRepository<'_>, SqliteProductRepository<'_>>,
) -> RepoResult<()> {
    let department = service.create_department(0, "Smoke Test")?;
    println!("department_create status={}", status(department.is_success()));
    let Some(department) = department.into_value() else {
        return Ok(());
    };

    let product = service.create_product(0, "Probe", Decimal::new(999, 2))?;
    println!("product_create status={}", status(product.is_success()));
    let Some(product) = product.into_value() else {
        return Ok(());
    };

    let assigned = service.assign_product_department(product.id(), Some(department.id()))?;
    println!("product_department status={}", status(assigned.is_success()));

    let rejected = service.update_product(product.id(), None, None)?;
    println!(
        "product_update_empty status={} message={}",
        status(rejected.is_success()),
        rejected.message()
    );

    println!("products={}", service.list_products()?.len());
    Ok(())
}

fn status(success: bool) -> &'static str {
    if success {
        "ok"
    } else {
        "rejected"
    }
}

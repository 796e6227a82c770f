//! Catalog use-case service.
//!
//! # Responsibility
//! - Run entity factories/mutators and persist only successful outcomes.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - A `Failure` outcome never reaches the repository.
//! - Outer `Err` means infrastructure failure or unknown id; business
//!   rejections are returned as `Ok(Outcome::Failure { .. })`.
//! - Logs carry ids and statuses only, never names or descriptions.

use crate::model::department::{Department, DepartmentId};
use crate::model::outcome::Outcome;
use crate::model::product::{Product, ProductId};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::product_repo::ProductRepository;
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use rust_decimal::Decimal;

/// Use-case service over department and product repositories.
pub struct CatalogService<D: DepartmentRepository, P: ProductRepository> {
    departments: D,
    products: P,
}

impl<D: DepartmentRepository, P: ProductRepository> CatalogService<D, P> {
    pub fn new(departments: D, products: P) -> Self {
        Self {
            departments,
            products,
        }
    }

    /// Builds a department and persists it on success.
    ///
    /// A department that fails `validate()` (empty name) is reported as a
    /// failure outcome and not stored. The success payload is the stored
    /// department with its assigned id.
    pub fn create_department(
        &self,
        id: DepartmentId,
        name: impl Into<String>,
    ) -> RepoResult<Outcome<Department>> {
        match Department::new(id, name) {
            Outcome::Success { message, value } => {
                if let Err(failure) = value.validate() {
                    let rejected = Outcome::from(failure);
                    log_rejected("department_create", id, &rejected);
                    return Ok(rejected);
                }
                let stored = self.departments.add(&value)?;
                info!(
                    "event=department_create module=service status=ok id={}",
                    stored.id()
                );
                Ok(Outcome::with_value(message, stored))
            }
            failure => {
                log_rejected("department_create", id, &failure);
                Ok(failure)
            }
        }
    }

    /// Renames a stored department.
    pub fn rename_department(&self, id: DepartmentId, name: Option<&str>) -> RepoResult<Outcome> {
        let mut department = self.load_department(id)?;
        let outcome = department.update(name);
        self.persist_department(&department, "department_rename", &outcome)?;
        Ok(outcome)
    }

    pub fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        self.departments.get_by_id(id)
    }

    pub fn list_departments(&self) -> RepoResult<Vec<Department>> {
        self.departments.get_all()
    }

    /// Deletes a department; products referencing it lose the association.
    pub fn delete_department(&self, id: DepartmentId) -> RepoResult<bool> {
        let removed = self.departments.delete(id)?;
        info!("event=department_delete module=service status=ok id={id} removed={removed}");
        Ok(removed)
    }

    /// Builds a product and persists it on success.
    pub fn create_product(
        &self,
        id: ProductId,
        description: impl Into<String>,
        price: Decimal,
    ) -> RepoResult<Outcome<Product>> {
        match Product::new(id, description, price) {
            Outcome::Success { message, value } => {
                if let Err(failure) = value.validate() {
                    let rejected = Outcome::from(failure);
                    log_rejected("product_create", id, &rejected);
                    return Ok(rejected);
                }
                let stored = self.products.add(&value)?;
                info!(
                    "event=product_create module=service status=ok id={}",
                    stored.id()
                );
                Ok(Outcome::with_value(message, stored))
            }
            failure => {
                log_rejected("product_create", id, &failure);
                Ok(failure)
            }
        }
    }

    /// Sets the image of a stored product.
    pub fn attach_product_image(
        &self,
        id: ProductId,
        image_url: Option<&str>,
    ) -> RepoResult<Outcome<String>> {
        let mut product = self.load_product(id)?;
        let outcome = product.add_image(image_url);
        self.persist_product(&product, "product_image", &outcome)?;
        Ok(outcome)
    }

    /// Associates a stored product with a stored department.
    ///
    /// `None` is reported as a failure outcome; an unknown department id is
    /// `RepoError::NotFound`.
    pub fn assign_product_department(
        &self,
        id: ProductId,
        department_id: Option<DepartmentId>,
    ) -> RepoResult<Outcome> {
        let mut product = self.load_product(id)?;
        let department = department_id
            .map(|department_id| self.load_department(department_id))
            .transpose()?;
        let outcome = product.add_department(department);
        self.persist_product(&product, "product_department", &outcome)?;
        Ok(outcome)
    }

    /// Applies a partial description/price update to a stored product.
    pub fn update_product(
        &self,
        id: ProductId,
        description: Option<&str>,
        price: Option<Decimal>,
    ) -> RepoResult<Outcome> {
        let mut product = self.load_product(id)?;
        let outcome = product.update(description, price);
        self.persist_product(&product, "product_update", &outcome)?;
        Ok(outcome)
    }

    pub fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>> {
        self.products.get_by_id(id)
    }

    pub fn list_products(&self) -> RepoResult<Vec<Product>> {
        self.products.get_all()
    }

    pub fn delete_product(&self, id: ProductId) -> RepoResult<bool> {
        let removed = self.products.delete(id)?;
        info!("event=product_delete module=service status=ok id={id} removed={removed}");
        Ok(removed)
    }

    fn load_department(&self, id: DepartmentId) -> RepoResult<Department> {
        self.departments
            .get_by_id(id)?
            .ok_or(RepoError::NotFound {
                entity: "department",
                id,
            })
    }

    fn load_product(&self, id: ProductId) -> RepoResult<Product> {
        self.products.get_by_id(id)?.ok_or(RepoError::NotFound {
            entity: "product",
            id,
        })
    }

    fn persist_department<T>(
        &self,
        department: &Department,
        event: &str,
        outcome: &Outcome<T>,
    ) -> RepoResult<()> {
        if outcome.is_failure() {
            log_rejected(event, department.id(), outcome);
            return Ok(());
        }
        self.departments.update(department)?;
        info!(
            "event={event} module=service status=ok id={}",
            department.id()
        );
        Ok(())
    }

    fn persist_product<T>(
        &self,
        product: &Product,
        event: &str,
        outcome: &Outcome<T>,
    ) -> RepoResult<()> {
        if outcome.is_failure() {
            log_rejected(event, product.id(), outcome);
            return Ok(());
        }
        self.products.update(product)?;
        info!("event={event} module=service status=ok id={}", product.id());
        Ok(())
    }
}

fn log_rejected<T>(event: &str, id: i64, outcome: &Outcome<T>) {
    warn!(
        "event={event} module=service status=rejected id={id} reason=\"{}\"",
        outcome.message()
    );
}

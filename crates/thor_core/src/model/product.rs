//! Product domain model.
//!
//! # Responsibility
//! - Define the sellable catalog item with fixed-point pricing.
//! - Expose image, department and attribute changes as named operations.
//!
//! # Invariants
//! - `description` and `price` are set at construction.
//! - `image_url`, when set, is never empty.
//! - `department` is a reference association; at most one, overwritten on
//!   each successful `add_department`.
//! - Fields are private; callers mutate only through the operations below.

use crate::model::department::Department;
use crate::model::outcome::{Outcome, ValidationFailure};
use crate::model::rules::{run_rules, Rule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage identity of a product. `0` means not yet assigned.
pub type ProductId = i64;

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    description: String,
    price: Decimal,
    department: Option<Department>,
    image_url: Option<String>,
}

#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    description: String,
    price: Decimal,
    #[serde(default)]
    department: Option<Department>,
    #[serde(default)]
    image_url: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationFailure;

    fn try_from(value: ProductRecord) -> Result<Self, Self::Error> {
        let product = Self {
            id: value.id,
            description: value.description,
            price: value.price,
            department: value.department,
            image_url: value.image_url,
        };
        product.validate()?;
        Ok(product)
    }
}

impl Product {
    /// Builds a product without image or department.
    ///
    /// No business rules are enforced yet, so this always succeeds. Use
    /// [`Product::new_with_rules`] to inject checks.
    pub fn new(id: ProductId, description: impl Into<String>, price: Decimal) -> Outcome<Product> {
        Self::new_with_rules(id, description, price, &[])
    }

    /// Builds a product and runs `rules` before reporting success.
    pub fn new_with_rules(
        id: ProductId,
        description: impl Into<String>,
        price: Decimal,
        rules: &[Rule<Product>],
    ) -> Outcome<Product> {
        let product = Self {
            id,
            description: description.into(),
            price,
            department: None,
            image_url: None,
        };

        if let Err(failure) = run_rules(&product, rules) {
            return failure.into();
        }

        Outcome::with_value("product created", product)
    }

    /// Rebuilds a product from trusted storage columns.
    pub(crate) fn from_parts(
        id: ProductId,
        description: String,
        price: Decimal,
        department: Option<Department>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            description,
            price,
            department,
            image_url,
        }
    }

    pub(crate) fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Sets the image URL or path, replacing any previous one.
    ///
    /// The success payload is the confirmation message.
    pub fn add_image(&mut self, image_url: Option<&str>) -> Outcome<String> {
        let Some(image_url) = image_url.filter(|value| !value.is_empty()) else {
            return ValidationFailure::ImageUrlRequired.into();
        };

        self.image_url = Some(image_url.to_string());
        let message = "image attached";
        Outcome::with_value(message, message.to_string())
    }

    /// Associates `department`, replacing any previous association.
    pub fn add_department(&mut self, department: Option<Department>) -> Outcome {
        let Some(department) = department else {
            return ValidationFailure::DepartmentRequired.into();
        };

        self.department = Some(department);
        Outcome::success("department assigned")
    }

    /// Applies whichever of `description` and `price` is present.
    ///
    /// Fails when both are absent.
    pub fn update(&mut self, description: Option<&str>, price: Option<Decimal>) -> Outcome {
        if description.is_none() && price.is_none() {
            return ValidationFailure::NothingToUpdate.into();
        }

        if let Some(description) = description {
            self.description = description.to_string();
        }
        if let Some(price) = price {
            self.price = price;
        }

        Outcome::success("product updated")
    }

    /// Checks the steady-state invariants required before persistence.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if self.image_url.as_deref().is_some_and(str::is_empty) {
            return Err(ValidationFailure::ImageUrlRequired);
        }
        if let Some(department) = &self.department {
            department.validate()?;
        }
        Ok(())
    }
}

//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `products` table.
//! - Resolve the department association by join on reads.
//!
//! # Invariants
//! - Write paths call `Product::validate()` before SQL mutations.
//! - Prices are stored as decimal text and parsed back without float
//!   conversion.
//! - The department association is stored by id only; the department row
//!   itself is owned by `DepartmentRepository`.

use crate::model::department::Department;
use crate::model::product::{Product, ProductId};
use crate::repo::{insert_id, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

const PRODUCT_SELECT_SQL: &str = "SELECT
    p.id,
    p.description,
    p.price,
    p.image_url,
    d.id AS department_id,
    d.name AS department_name
FROM products p
LEFT JOIN departments d ON d.id = p.department_id";

/// Repository interface for product persistence.
pub trait ProductRepository {
    fn get_all(&self) -> RepoResult<Vec<Product>>;
    fn get_by_id(&self, id: ProductId) -> RepoResult<Option<Product>>;
    fn add(&self, product: &Product) -> RepoResult<Product>;
    fn update(&self, product: &Product) -> RepoResult<Product>;
    fn delete(&self, id: ProductId) -> RepoResult<bool>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY p.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut products = Vec::new();

        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn get_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE p.id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn add(&self, product: &Product) -> RepoResult<Product> {
        product.validate()?;

        self.conn.execute(
            "INSERT INTO products (
                id,
                description,
                price,
                department_id,
                image_url
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                insert_id(product.id()),
                product.description(),
                product.price().to_string(),
                product.department().map(Department::id),
                product.image_url(),
            ],
        )?;

        Ok(product.clone().with_id(self.conn.last_insert_rowid()))
    }

    fn update(&self, product: &Product) -> RepoResult<Product> {
        product.validate()?;

        let changed = self.conn.execute(
            "UPDATE products
             SET
                description = ?1,
                price = ?2,
                department_id = ?3,
                image_url = ?4
             WHERE id = ?5;",
            params![
                product.description(),
                product.price().to_string(),
                product.department().map(Department::id),
                product.image_url(),
                product.id(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "product",
                id: product.id(),
            });
        }

        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let id: ProductId = row.get("id")?;

    let price_text: String = row.get("price")?;
    let price = Decimal::from_str(&price_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid price `{price_text}` in products.price for product {id}"
        ))
    })?;

    let department = match row.get::<_, Option<i64>>("department_id")? {
        Some(department_id) => Some(Department::from_parts(
            department_id,
            row.get("department_name")?,
        )),
        None => None,
    };

    let product = Product::from_parts(
        id,
        row.get("description")?,
        price,
        department,
        row.get("image_url")?,
    );
    product.validate()?;
    Ok(product)
}

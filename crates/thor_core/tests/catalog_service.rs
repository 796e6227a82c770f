use rusqlite::Connection;
use rust_decimal::Decimal;
use thor_core::db::open_db_in_memory;
use thor_core::{
    CatalogService, Department, DepartmentRepository, Product, ProductRepository, RepoError,
    RepoResult, SqliteDepartmentRepository, SqliteProductRepository, ValidationFailure,
};

type Service<'conn> =
    CatalogService<SqliteDepartmentRepository<'conn>, SqliteProductRepository<'conn>>;

fn service(conn: &Connection) -> Service<'_> {
    CatalogService::new(
        SqliteDepartmentRepository::new(conn),
        SqliteProductRepository::new(conn),
    )
}

fn stored_department<D, P>(service: &CatalogService<D, P>, name: &str) -> Department
where
    D: DepartmentRepository,
    P: ProductRepository,
{
    service
        .create_department(0, name)
        .expect("create should reach storage")
        .into_value()
        .expect("valid department should be created")
}

fn stored_product<D, P>(service: &CatalogService<D, P>, description: &str, price: Decimal) -> Product
where
    D: DepartmentRepository,
    P: ProductRepository,
{
    service
        .create_product(0, description, price)
        .expect("create should reach storage")
        .into_value()
        .expect("valid product should be created")
}

#[test]
fn create_department_persists_and_returns_stored_form() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);

    let outcome = service
        .create_department(0, "Books")
        .expect("create should reach storage");
    assert!(outcome.is_success());
    let department = outcome
        .into_value()
        .expect("success outcome should carry the stored department");
    assert!(department.id() > 0);

    let listed = service.list_departments().expect("listing should succeed");
    assert_eq!(listed, vec![department]);
}

#[test]
fn create_department_with_empty_name_is_rejected_without_storing() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);

    let outcome = service
        .create_department(0, "")
        .expect("validation failures are outcomes, not errors");
    assert!(outcome.is_failure());
    assert_eq!(outcome.message(), ValidationFailure::NameRequired.to_string());

    assert!(service
        .list_departments()
        .expect("listing should succeed")
        .is_empty());
}

#[test]
fn rename_department_failure_is_not_persisted() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);
    let id = stored_department(&service, "Books").id();

    let rejected = service
        .rename_department(id, Some(""))
        .expect("stored department should be found");
    assert!(rejected.is_failure());
    let unchanged = service
        .get_department(id)
        .expect("lookup should succeed")
        .expect("department should exist");
    assert_eq!(unchanged.name(), "Books");

    let renamed = service
        .rename_department(id, Some("Electronics"))
        .expect("stored department should be found");
    assert!(renamed.is_success());
    let stored = service
        .get_department(id)
        .expect("lookup should succeed")
        .expect("department should exist");
    assert_eq!(stored.name(), "Electronics");
}

#[test]
fn mutating_unknown_ids_returns_not_found() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);

    let err = service
        .rename_department(5, Some("X"))
        .expect_err("unknown department should not be renamed");
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "department",
            id: 5
        }
    ));

    let err = service
        .update_product(6, Some("X"), None)
        .expect_err("unknown product should not be updated");
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "product",
            id: 6
        }
    ));
}

#[test]
fn product_flow_persists_each_successful_step() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);

    let department = stored_department(&service, "Garden");
    let product = stored_product(&service, "Rake", Decimal::new(1250, 2));

    assert!(service
        .attach_product_image(product.id(), Some("/img/rake.png"))
        .expect("stored product should be found")
        .is_success());
    assert!(service
        .assign_product_department(product.id(), Some(department.id()))
        .expect("stored product and department should be found")
        .is_success());
    assert!(service
        .update_product(product.id(), Some("Leaf rake"), None)
        .expect("stored product should be found")
        .is_success());

    let stored = service
        .get_product(product.id())
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(stored.description(), "Leaf rake");
    assert_eq!(stored.price(), Decimal::new(1250, 2));
    assert_eq!(stored.image_url(), Some("/img/rake.png"));
    assert_eq!(stored.department(), Some(&department));
}

#[test]
fn product_rejections_leave_storage_untouched() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);
    let product = stored_product(&service, "Lamp", Decimal::ONE);

    let image = service
        .attach_product_image(product.id(), None)
        .expect("stored product should be found");
    assert_eq!(
        image.message(),
        ValidationFailure::ImageUrlRequired.to_string()
    );

    let department = service
        .assign_product_department(product.id(), None)
        .expect("stored product should be found");
    assert_eq!(
        department.message(),
        ValidationFailure::DepartmentRequired.to_string()
    );

    let update = service
        .update_product(product.id(), None, None)
        .expect("stored product should be found");
    assert_eq!(
        update.message(),
        ValidationFailure::NothingToUpdate.to_string()
    );

    let stored = service
        .get_product(product.id())
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(stored, product);
}

#[test]
fn assigning_unknown_department_returns_not_found() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);
    let product = stored_product(&service, "Lamp", Decimal::ONE);

    let err = service
        .assign_product_department(product.id(), Some(404))
        .expect_err("unknown department should not be assigned");
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "department",
            id: 404
        }
    ));
}

#[test]
fn delete_operations_report_removal() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let service = service(&conn);

    let department = stored_department(&service, "Toys");
    let product = stored_product(&service, "Kite", Decimal::TEN);

    assert!(service
        .delete_department(department.id())
        .expect("first delete should succeed"));
    assert!(!service
        .delete_department(department.id())
        .expect("second delete should succeed"));
    assert!(service
        .delete_product(product.id())
        .expect("delete should succeed"));
    assert!(service
        .list_products()
        .expect("listing should succeed")
        .is_empty());
}

/// Serves one department and panics on any write.
struct ReadOnlyDepartments(Department);

impl DepartmentRepository for ReadOnlyDepartments {
    fn get_all(&self) -> RepoResult<Vec<Department>> {
        Ok(vec![self.0.clone()])
    }

    fn get_by_id(&self, id: i64) -> RepoResult<Option<Department>> {
        Ok((id == self.0.id()).then(|| self.0.clone()))
    }

    fn add(&self, _department: &Department) -> RepoResult<Department> {
        panic!("unexpected write");
    }

    fn update(&self, _department: &Department) -> RepoResult<Department> {
        panic!("unexpected write");
    }

    fn delete(&self, _id: i64) -> RepoResult<bool> {
        panic!("unexpected write");
    }
}

#[test]
fn failure_outcomes_never_reach_the_repository() {
    let conn = open_db_in_memory().expect("in-memory catalog db should open");
    let books = Department::new(1, "Books")
        .into_value()
        .expect("factory without rules should succeed");
    let service = CatalogService::new(
        ReadOnlyDepartments(books),
        SqliteProductRepository::new(&conn),
    );

    for name in [None, Some("")] {
        let outcome = service
            .rename_department(1, name)
            .expect("stored department should be found");
        assert!(outcome.is_failure());
    }

    let created = service
        .create_department(0, "")
        .expect("invalid department should be rejected before storage");
    assert!(created.is_failure());

    let listed = service.list_departments().expect("listing should succeed");
    assert_eq!(listed[0].name(), "Books");

    let product = stored_product(&service, "Solo", Decimal::ONE);
    let products = SqliteProductRepository::new(&conn);
    assert_eq!(
        products.get_all().expect("listing should succeed"),
        vec![product]
    );
}

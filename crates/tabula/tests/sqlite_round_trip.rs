//! End-to-end: declare records, execute their DDL on a live sqlite
//! connection, introspect the result, and project rows back out.
//!
//! Two dialect notes for these fixtures: records declare assigned keys
//! (sqlite does not parse the auto-increment clause), and the child
//! side carries its foreign key inline via a one-to-one declaration
//! (sqlite cannot add a foreign key through ALTER TABLE, so deferred
//! one-to-many wiring is asserted as text only).

use std::fs;

use tabula::schema::app::{Field, FieldType, GenerationStrategy, HasMany, HasOne, Record};
use tabula::{describe_table, table_exists, Connection, Ddl, Registry, Tuple2};
use tabula_driver_sqlite::Sqlite;

fn assigned_id() -> Field {
    Field::primary_key("id", FieldType::I64).auto(GenerationStrategy::Assigned)
}

fn address() -> Record {
    Record::builder("Address")
        .field(assigned_id())
        .field(Field::new("street", FieldType::String).size(80))
        .field(Field::new("zip_code", FieldType::String).size(10))
        .build()
}

fn listing() -> Record {
    Record::builder("Listing")
        .field(assigned_id())
        .field(Field::new("name", FieldType::String).size(40).not_null())
        .field(Field::has_one(
            "address",
            HasOne::new("Address", "address_id", "id", FieldType::I64),
        ))
        .build()
}

fn listing_detail() -> Record {
    Record::builder("ListingDetail")
        .field(assigned_id())
        .field(Field::has_one(
            "listing",
            HasOne::new("Listing", "listing_id", "id", FieldType::I64),
        ))
        .field(Field::new("note", FieldType::String).size(200))
        .build()
}

fn registry() -> Registry {
    // Parents before children, so drop_all reverses into
    // child-before-parent order.
    let mut registry = Registry::new();
    registry.register(address());
    registry.register(listing());
    registry.register(listing_detail());
    registry
}

#[test]
fn create_describe_and_drop() {
    let db = Sqlite::in_memory().unwrap();
    let ddl = Ddl::new(&db);

    let sql = ddl.create_all(&registry(), true).unwrap();
    assert!(sql.contains("CREATE TABLE listing ("));
    assert!(sql.contains("FOREIGN KEY(address_id) REFERENCES address(id)"));

    assert!(table_exists(&db, "listing", None).unwrap());
    assert!(table_exists(&db, "address", None).unwrap());
    assert!(!table_exists(&db, "not_there", None).unwrap());

    let table = describe_table(&db, "listing", None).unwrap();
    let id = table.column("id").unwrap();
    assert!(id.primary_key);
    assert!(!id.nullable);

    let address_id = table.column("address_id").unwrap();
    assert!(address_id.foreign_key);
    assert_eq!(address_id.referenced_table.as_deref(), Some("address"));
    assert_eq!(address_id.referenced_column.as_deref(), Some("id"));

    ddl.drop_all(&registry(), true).unwrap();
    assert!(!table_exists(&db, "listing", None).unwrap());
    assert!(!table_exists(&db, "address", None).unwrap());
}

#[test]
fn describe_marks_the_child_side_foreign_key() {
    let db = Sqlite::in_memory().unwrap();
    let ddl = Ddl::new(&db);
    ddl.create_all(&registry(), true).unwrap();

    let table = describe_table(&db, "listing_detail", None).unwrap();
    let listing_id = table.column("listing_id").unwrap();
    assert!(listing_id.foreign_key);
    assert_eq!(listing_id.referenced_table.as_deref(), Some("listing"));
    assert_eq!(listing_id.referenced_column.as_deref(), Some("id"));
}

#[test]
fn dry_run_synthesizes_without_touching_the_database() {
    let db = Sqlite::in_memory().unwrap();
    let ddl = Ddl::new(&db);

    let sql = ddl.create_table(&address(), false).unwrap();
    assert!(sql.starts_with("CREATE TABLE address ("));
    assert!(!table_exists(&db, "address", None).unwrap());

    // Deferred one-to-many wiring is synthesized after the CREATE.
    let parent = Record::builder("Listing")
        .field(assigned_id())
        .field(Field::has_many(
            "listing_details",
            HasMany::new("ListingDetail", "listing_id", "id"),
        ))
        .build();
    let sql = ddl.create_table(&parent, false).unwrap();
    assert!(sql.ends_with(
        "ALTER TABLE listing_detail ADD FOREIGN KEY(listing_id) REFERENCES listing(id);\n"
    ));
}

#[test]
fn execution_failure_wraps_the_statement() {
    let db = Sqlite::in_memory().unwrap();
    let ddl = Ddl::new(&db);

    ddl.create_table(&address(), true).unwrap();
    let err = ddl.create_table(&address(), true).unwrap_err();
    assert!(err.is_ddl_execution());
    assert!(err.to_string().contains("CREATE TABLE address"));
}

#[test]
fn projects_rows_from_a_live_query() {
    let db = Sqlite::in_memory().unwrap();
    Ddl::new(&db).create_table(&address(), true).unwrap();

    db.execute("INSERT INTO address (id, street, zip_code) VALUES (1, 'Elm St', '12345')")
        .unwrap();
    db.execute("INSERT INTO address (id, street, zip_code) VALUES (2, 'Oak Ave', '54321')")
        .unwrap();

    let pairs =
        Tuple2::<i64, String>::query_all(&db, "SELECT id, street FROM address ORDER BY id")
            .unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0], Tuple2(1, "Elm St".to_owned()));

    let one = Tuple2::<i64, String>::query_one(
        &db,
        "SELECT id, street FROM address WHERE zip_code = '54321'",
    )
    .unwrap();
    assert_eq!(one, Some(Tuple2(2, "Oak Ave".to_owned())));

    let err =
        Tuple2::<i64, String>::query_one(&db, "SELECT id, street FROM address").unwrap_err();
    assert!(err.is_too_many_rows());

    let err = Tuple2::<i64, String>::query_all(&db, "SELECT id FROM address").unwrap_err();
    assert!(err.is_arity_mismatch());
}

#[test]
fn generated_code_round_trips_an_introspected_table() {
    let db = Sqlite::in_memory().unwrap();
    Ddl::new(&db).create_table(&address(), true).unwrap();

    let table = describe_table(&db, "address", None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let files = tabula::codegen::Generator::new()
        .generate(&table, dir.path())
        .unwrap();

    let base = fs::read_to_string(&files.base).unwrap();
    assert!(base.contains("pub struct AddressBase {"));
    assert!(base.contains("    pub fn zip_code(&self) -> Option<&str> {"));
    assert!(base.contains("    pub fn set_zip_code(&mut self, zip_code: Option<String>) {"));
}

use tabula::driver::{ColumnMetadata, ForeignKeyMetadata, PrimaryKeyMetadata};
use tabula::{describe_table, table_exists, Connection, Result, Rows};

/// A canned metadata source standing in for a live connection.
#[derive(Default)]
struct FixtureConnection {
    columns: Vec<ColumnMetadata>,
    primary_keys: Vec<PrimaryKeyMetadata>,
    imported_keys: Vec<ForeignKeyMetadata>,
}

impl Connection for FixtureConnection {
    fn columns(&self, _: &str, _: Option<&str>) -> Result<Vec<ColumnMetadata>> {
        Ok(self.columns.clone())
    }

    fn primary_keys(&self, _: &str, _: Option<&str>) -> Result<Vec<PrimaryKeyMetadata>> {
        Ok(self.primary_keys.clone())
    }

    fn imported_keys(&self, _: &str, _: Option<&str>) -> Result<Vec<ForeignKeyMetadata>> {
        Ok(self.imported_keys.clone())
    }

    fn table_names(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }

    fn execute(&self, _: &str) -> Result<u64> {
        Ok(0)
    }

    fn query(&self, _: &str) -> Result<Rows> {
        Ok(Rows::default())
    }
}

fn column(name: &str, type_name: &str) -> ColumnMetadata {
    ColumnMetadata {
        name: name.to_owned(),
        type_name: type_name.to_owned(),
        nullable: true,
        default_value: None,
        size: 0,
        remarks: None,
    }
}

#[test]
fn marks_exactly_the_reported_key_columns() {
    let connection = FixtureConnection {
        columns: vec![
            column("id", "bigint"),
            column("listing_id", "bigint"),
            column("note", "varchar"),
        ],
        primary_keys: vec![PrimaryKeyMetadata {
            column_name: "id".to_owned(),
        }],
        imported_keys: vec![ForeignKeyMetadata {
            pk_table: "listing".to_owned(),
            pk_column: "id".to_owned(),
            fk_table: "listing_detail".to_owned(),
            fk_column: "listing_id".to_owned(),
        }],
    };

    let table = describe_table(&connection, "listing_detail", None).unwrap();

    assert_eq!(table.table_name, "listing_detail");
    assert_eq!(table.columns.len(), 3);

    let id = table.column("id").unwrap();
    assert!(id.primary_key);
    assert!(!id.foreign_key);

    let listing_id = table.column("listing_id").unwrap();
    assert!(!listing_id.primary_key);
    assert!(listing_id.foreign_key);
    assert_eq!(listing_id.referenced_table.as_deref(), Some("listing"));
    assert_eq!(listing_id.referenced_column.as_deref(), Some("id"));

    // Columns absent from the key result sets stay unmarked.
    let note = table.column("note").unwrap();
    assert!(!note.primary_key && !note.foreign_key);
}

#[test]
fn key_matching_is_case_sensitive() {
    let connection = FixtureConnection {
        columns: vec![column("ID", "bigint")],
        primary_keys: vec![PrimaryKeyMetadata {
            column_name: "id".to_owned(),
        }],
        ..Default::default()
    };

    let table = describe_table(&connection, "t", None).unwrap();
    assert!(!table.column("ID").unwrap().primary_key);
}

#[test]
fn empty_key_passes_are_not_an_error() {
    let connection = FixtureConnection {
        columns: vec![column("id", "bigint")],
        ..Default::default()
    };

    let table = describe_table(&connection, "t", None).unwrap();
    assert_eq!(table.primary_keys().count(), 0);
    assert_eq!(table.foreign_keys().count(), 0);
}

#[test]
fn carries_column_metadata_through() {
    let connection = FixtureConnection {
        columns: vec![ColumnMetadata {
            name: "street".to_owned(),
            type_name: "varchar".to_owned(),
            nullable: false,
            default_value: Some("''".to_owned()),
            size: 80,
            remarks: Some("street line".to_owned()),
        }],
        ..Default::default()
    };

    let table = describe_table(&connection, "address", Some("main")).unwrap();
    assert_eq!(table.schema_name.as_deref(), Some("main"));

    let street = table.column("street").unwrap();
    assert!(!street.nullable);
    assert_eq!(street.size, 80);
    assert_eq!(street.default_value.as_deref(), Some("''"));
    assert_eq!(street.comment.as_deref(), Some("street line"));
}

#[test]
fn table_exists_follows_described_columns() {
    let connection = FixtureConnection {
        columns: vec![column("id", "bigint")],
        ..Default::default()
    };
    assert!(table_exists(&connection, "t", None).unwrap());

    let empty = FixtureConnection::default();
    assert!(!table_exists(&empty, "t", None).unwrap());
}

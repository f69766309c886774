use pretty_assertions::assert_eq;
use tabula_core::schema::app::{
    EnumEncoding, EnumType, Field, FieldType, GenerationStrategy, HasMany, HasOne, Record,
};
use tabula_sql::{create_table_sql, Serializer, Statement};

fn auto_id() -> Field {
    Field::primary_key("id", FieldType::I64).auto(GenerationStrategy::Auto)
}

#[test]
fn create_plain_table() {
    let record = Record::builder("Address")
        .field(auto_id())
        .field(Field::new("street", FieldType::String).size(80))
        .field(Field::new("zip_code", FieldType::String).size(10).not_null())
        .build();

    let sql = create_table_sql(&record).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE address (\n\
         \tid BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,\n\
         \tstreet VARCHAR(80),\n\
         \tzip_code VARCHAR(10) NOT NULL\n\
         );\n"
    );
}

#[test]
fn assigned_primary_key_has_no_auto_increment() {
    let record = Record::builder("Country")
        .field(
            Field::primary_key("code", FieldType::String)
                .size(2)
                .auto(GenerationStrategy::Assigned),
        )
        .build();

    let sql = create_table_sql(&record).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE country (\n\tcode VARCHAR(2) NOT NULL PRIMARY KEY\n);\n"
    );
}

#[test]
fn undeclared_generation_strategy_is_plain_primary_key() {
    let record = Record::builder("Country")
        .field(Field::primary_key("id", FieldType::I64))
        .build();

    let sql = create_table_sql(&record).unwrap();

    assert_eq!(sql, "CREATE TABLE country (\n\tid BIGINT NOT NULL PRIMARY KEY\n);\n");
}

#[test]
fn transient_fields_emit_no_column() {
    let record = Record::builder("Photo")
        .field(auto_id())
        .field(Field::new("cached_pixels", FieldType::I32).transient())
        .build();

    let sql = create_table_sql(&record).unwrap();

    assert!(!sql.contains("cached_pixels"));
}

#[test]
fn has_one_produces_join_column_and_inline_foreign_key() {
    let record = Record::builder("Listing")
        .field(auto_id())
        .field(Field::new("name", FieldType::String).size(40))
        .field(Field::has_one(
            "address",
            HasOne::new("Address", "address_id", "id", FieldType::I64),
        ))
        .build();

    let sql = create_table_sql(&record).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE listing (\n\
         \tid BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,\n\
         \tname VARCHAR(40),\n\
         \taddress_id BIGINT,\n\
         \tFOREIGN KEY(address_id) REFERENCES address(id)\n\
         );\n"
    );
}

#[test]
fn has_many_defers_an_alter_to_the_child_table() {
    let record = Record::builder("Listing")
        .field(auto_id())
        .field(Field::has_many(
            "listing_details",
            HasMany::new("ListingDetail", "listing_id", "id"),
        ))
        .build();

    let sql = create_table_sql(&record).unwrap();

    // No listing_id-bearing column on the parent's own CREATE.
    assert_eq!(
        sql,
        "CREATE TABLE listing (\n\
         \tid BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY\n\
         );\n\
         ALTER TABLE listing_detail ADD FOREIGN KEY(listing_id) REFERENCES listing(id);\n"
    );
}

#[test]
fn full_record_column_and_alter_counts() {
    // One primary key, two plain fields, one one-to-one, one one-to-many:
    // the CREATE has 2 + 2 column lines plus the inline foreign key, and
    // exactly one trailing ALTER targets the declared child.
    let record = Record::builder("Listing")
        .field(auto_id())
        .field(Field::new("name", FieldType::String).size(40))
        .field(Field::new("price", FieldType::F64))
        .field(Field::has_one(
            "address",
            HasOne::new("Address", "address_id", "id", FieldType::I64),
        ))
        .field(Field::has_many(
            "listing_details",
            HasMany::new("ListingDetail", "listing_id", "id"),
        ))
        .build();

    let sql = create_table_sql(&record).unwrap();

    let column_lines = sql.lines().filter(|line| line.starts_with('\t')).count();
    assert_eq!(column_lines, 5); // 4 columns + 1 inline foreign key

    let alters = sql.lines().filter(|line| line.starts_with("ALTER TABLE")).count();
    assert_eq!(alters, 1);
    assert!(sql.contains("ALTER TABLE listing_detail "));
}

#[test]
fn enum_fields_follow_their_encoding() {
    let record = Record::builder("Task")
        .field(auto_id())
        .field(Field::new(
            "status",
            FieldType::Enum(EnumType::new(["OPEN", "CLOSED"], EnumEncoding::Ordinal)),
        ))
        .field(Field::new(
            "priority",
            FieldType::Enum(EnumType::new(["LOW", "URGENT"], EnumEncoding::Name)),
        ))
        .build();

    let sql = create_table_sql(&record).unwrap();

    assert!(sql.contains("\tstatus INT,\n"));
    assert!(sql.contains("\tpriority VARCHAR(6)\n"));
}

#[test]
fn timestamp_field_name_selects_timestamp_storage() {
    let record = Record::builder("AuditEntry")
        .field(auto_id())
        .field(Field::new("created_timestamp", FieldType::DateTime))
        .field(Field::new("updated_at", FieldType::DateTime))
        .field(Field::new("due_date", FieldType::Date))
        .build();

    let sql = create_table_sql(&record).unwrap();

    assert!(sql.contains("\tcreated_timestamp TIMESTAMP,\n"));
    assert!(sql.contains("\tupdated_at DATETIME,\n"));
    assert!(sql.contains("\tdue_date DATE\n"));
}

#[test]
fn string_field_without_size_fails_naming_the_field() {
    let record = Record::builder("Address")
        .field(auto_id())
        .field(Field::new("street", FieldType::String))
        .build();

    let err = create_table_sql(&record).unwrap_err();
    assert!(err.is_missing_size_constraint());
    assert!(err.to_string().contains("street"));
}

#[test]
fn serializer_emits_statements_independently() {
    let record = Record::builder("Listing")
        .field(auto_id())
        .field(Field::has_many(
            "photos",
            HasMany::new("Photo", "listing_id", "id"),
        ))
        .build();

    let statements = tabula_sql::create_statements(&record).unwrap();
    assert_eq!(statements.len(), 2);

    let serializer = Serializer;
    assert!(serializer.serialize(&statements[0]).starts_with("CREATE TABLE listing ("));
    assert_eq!(
        serializer.serialize(&statements[1]),
        "ALTER TABLE photo ADD FOREIGN KEY(listing_id) REFERENCES listing(id);\n"
    );

    let drop = Statement::drop_table(&record);
    assert_eq!(serializer.serialize(&drop), "DROP TABLE listing;");
}

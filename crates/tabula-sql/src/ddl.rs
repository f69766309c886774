use crate::{Serializer, Statement};

use tabula_core::schema::app::Record;
use tabula_core::Result;

/// All statements needed to create a record's table: the CREATE TABLE
/// first, then one deferred ALTER per one-to-many relationship.
///
/// The ordering matters — a child's ALTER can only run once the child
/// table exists — so the ALTERs always come last, and callers creating
/// several related tables create parents before children.
pub fn create_statements(record: &Record) -> Result<Vec<Statement>> {
    let mut statements = vec![Statement::create_table(record)?];
    statements.extend(Statement::add_foreign_keys(record));
    Ok(statements)
}

/// The full CREATE TABLE text for a record, deferred ALTERs included.
pub fn create_table_sql(record: &Record) -> Result<String> {
    let serializer = Serializer;
    let mut sql = String::new();

    for statement in create_statements(record)? {
        sql.push_str(&serializer.serialize(&statement));
    }

    Ok(sql)
}

/// The DROP TABLE statement for a record.
pub fn drop_statement(record: &Record) -> Statement {
    Statement::drop_table(record)
}

/// The DROP TABLE text for a record.
pub fn drop_table_sql(record: &Record) -> String {
    Serializer.serialize(&drop_statement(record))
}

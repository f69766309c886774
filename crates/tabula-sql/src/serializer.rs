#[macro_use]
mod fmt;
use fmt::ToSql;

// Fragment serializers
mod alter_table;
mod column_def;
mod create_table;
mod drop_table;
mod foreign_key;
mod statement;

use crate::stmt::Statement;

/// Serialize DDL statements to SQL text.
///
/// One dialect; the output format is fixed:
///
/// ```text
/// CREATE TABLE <name> (
/// <tab><col>,
/// ...
/// );
/// ALTER TABLE <child> ADD FOREIGN KEY(<col>) REFERENCES <parent>(<col>);
/// DROP TABLE <name>;
/// ```
#[derive(Debug, Default)]
pub struct Serializer;

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        stmt.to_sql(&mut fmt);

        ret
    }
}

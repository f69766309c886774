use super::*;

use tabula_core::schema::app::Record;

/// A statement to drop a SQL table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,
}

impl Statement {
    /// Drops the record's table. An explicit table-name override on the
    /// record is emitted verbatim.
    pub fn drop_table(record: &Record) -> Self {
        DropTable {
            name: Name::from(record.table_name()),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}

use super::{ForeignKey, Name, Statement};

use tabula_core::schema::app::Record;

/// A statement to alter a SQL table.
#[derive(Debug, Clone)]
pub struct AlterTable {
    /// Name of the table being altered.
    pub name: Name,

    /// The alteration to apply.
    pub action: AlterTableAction,
}

/// The action to perform in an ALTER TABLE statement.
#[derive(Debug, Clone)]
pub enum AlterTableAction {
    /// Add a foreign-key constraint.
    AddForeignKey(ForeignKey),
}

impl Statement {
    /// Deferred foreign keys for the record's one-to-many relationships.
    ///
    /// Each statement targets the child table, adding a key from the
    /// child's join column to this record's referenced column. The child
    /// table must exist before these run; callers creating several
    /// related tables sequence parent creation before child creation.
    pub fn add_foreign_keys(record: &Record) -> Vec<Statement> {
        record
            .fields
            .iter()
            .filter_map(|field| field.ty.as_has_many())
            .map(|has_many| {
                AlterTable {
                    name: Name::from(has_many.target_table.as_str()),
                    action: AlterTableAction::AddForeignKey(ForeignKey {
                        column: has_many.column.clone(),
                        table: record.table_name(),
                        references: has_many.references.clone(),
                    }),
                }
                .into()
            })
            .collect()
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}

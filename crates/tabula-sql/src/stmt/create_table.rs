use super::*;

use tabula_core::schema::app::{FieldTy, Record};
use tabula_core::Result;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Inline foreign-key clauses, one per one-to-one join column
    pub foreign_keys: Vec<ForeignKey>,
}

impl Statement {
    /// Builds a CREATE TABLE statement from a record declaration.
    ///
    /// Transient fields and one-to-many fields produce no column. A
    /// one-to-one field produces a join column named by its declaration
    /// and typed to the target's primary key, plus an inline foreign-key
    /// clause. Deferred one-to-many wiring is a separate statement; see
    /// [`Statement::add_foreign_keys`].
    pub fn create_table(record: &Record) -> Result<Self> {
        let mut columns = vec![];
        let mut foreign_keys = vec![];

        for field in &record.fields {
            if field.transient {
                continue;
            }

            match &field.ty {
                FieldTy::HasMany(_) => continue,
                FieldTy::HasOne(has_one) => {
                    // The relationship substitutes for the field's own
                    // type resolution.
                    let ty = has_one
                        .target_pk_ty
                        .sql_type(&field.name, has_one.target_pk_size)?;

                    columns.push(ColumnDef {
                        name: has_one.column.clone(),
                        ty,
                        not_null: !field.nullable,
                        key: KeyClause::None,
                    });

                    foreign_keys.push(ForeignKey {
                        column: has_one.column.clone(),
                        table: has_one.target_table.clone(),
                        references: has_one.references.clone(),
                    });
                }
                FieldTy::Scalar(ty) => {
                    let key = if field.primary_key {
                        if field.is_auto_increment() {
                            KeyClause::AutoIncrementPrimaryKey
                        } else {
                            KeyClause::PrimaryKey
                        }
                    } else {
                        KeyClause::None
                    };

                    columns.push(ColumnDef {
                        name: field.column_name(),
                        ty: ty.sql_type(&field.name, field.size)?,
                        not_null: !field.nullable,
                        key,
                    });
                }
            }
        }

        Ok(CreateTable {
            name: Name::from(record.table_name()),
            columns,
            foreign_keys,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}

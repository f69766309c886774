use tabula_core::schema::db::{ColumnBuilder, TableDescription};
use tabula_core::{Connection, Result};

/// Builds a [`TableDescription`] from live connection metadata.
///
/// Three passes over the platform's metadata facility: list the
/// columns, then mark primary keys, then mark imported (foreign) keys.
/// Key rows are matched to columns by case-sensitive name equality;
/// zero key rows simply leaves the flags unset. Connection failures
/// propagate as connectivity errors and are not retried here.
pub fn describe_table(
    connection: &dyn Connection,
    table_name: &str,
    schema_name: Option<&str>,
) -> Result<TableDescription> {
    let columns = connection.columns(table_name, schema_name)?;
    tracing::debug!(table_name, columns = columns.len(), "listed columns");

    let mut builders: Vec<ColumnBuilder> = columns
        .into_iter()
        .map(|meta| {
            let mut builder = ColumnBuilder::new(meta.name, meta.type_name)
                .nullable(meta.nullable)
                .size(meta.size);
            if let Some(default_value) = meta.default_value {
                builder = builder.default_value(default_value);
            }
            if let Some(remarks) = meta.remarks {
                builder = builder.comment(remarks);
            }
            builder
        })
        .collect();

    for key in connection.primary_keys(table_name, schema_name)? {
        for builder in &mut builders {
            if builder.name() == key.column_name {
                builder.mark_primary_key();
            }
        }
    }

    for key in connection.imported_keys(table_name, schema_name)? {
        for builder in &mut builders {
            if builder.name() == key.fk_column {
                builder.mark_foreign_key(key.pk_table.clone(), key.pk_column.clone());
            }
        }
    }

    let comment = connection.table_comment(table_name, schema_name)?;

    Ok(TableDescription::new(
        table_name,
        schema_name.map(str::to_owned),
        comment,
        builders.into_iter().map(ColumnBuilder::freeze).collect(),
    ))
}

/// Whether `table_name` exists on the connection: a table with zero
/// described columns is treated as absent.
pub fn table_exists(
    connection: &dyn Connection,
    table_name: &str,
    schema_name: Option<&str>,
) -> Result<bool> {
    Ok(!connection.columns(table_name, schema_name)?.is_empty())
}

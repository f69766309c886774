//! Sqlite driver for tabula.
//!
//! Implements the core [`Connection`] contract over `rusqlite`:
//! metadata comes from `PRAGMA table_info` / `PRAGMA foreign_key_list`
//! and `sqlite_master`, execution and queries go straight through the
//! blocking handle. Every failure surfaces as a connectivity error
//! naming the operation; nothing is retried here.

mod value;

use std::path::Path;

use tabula_core::driver::{ColumnMetadata, ForeignKeyMetadata, PrimaryKeyMetadata};
use tabula_core::{Connection, Error, Result, Rows};

/// A blocking sqlite connection.
#[derive(Debug)]
pub struct Sqlite {
    connection: rusqlite::Connection,
}

impl Sqlite {
    /// Opens a database file, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let connection = rusqlite::Connection::open(path.as_ref())
            .map_err(|err| Error::connectivity("open database file", err))?;
        Ok(Self { connection })
    }

    /// Opens an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = rusqlite::Connection::open_in_memory()
            .map_err(|err| Error::connectivity("open in-memory database", err))?;
        Ok(Self { connection })
    }

    fn table_info(&self, table: &str, schema: Option<&str>) -> Result<Vec<TableInfoRow>> {
        let sql = match schema {
            Some(schema) => format!("PRAGMA {schema}.table_info(\"{table}\")"),
            None => format!("PRAGMA table_info(\"{table}\")"),
        };

        let operation = || format!("list columns for table `{table}`");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|err| Error::connectivity(operation(), err))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(TableInfoRow {
                    name: row.get("name")?,
                    declared_type: row.get("type")?,
                    not_null: row.get("notnull")?,
                    default_value: row.get("dflt_value")?,
                    primary_key: row.get("pk")?,
                })
            })
            .map_err(|err| Error::connectivity(operation(), err))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|err| Error::connectivity(operation(), err))
    }
}

struct TableInfoRow {
    name: String,
    declared_type: String,
    not_null: bool,
    default_value: Option<String>,
    primary_key: i32,
}

impl Connection for Sqlite {
    fn columns(&self, table: &str, schema: Option<&str>) -> Result<Vec<ColumnMetadata>> {
        let columns = self
            .table_info(table, schema)?
            .into_iter()
            .map(|row| {
                let (type_name, size) = split_type_decl(&row.declared_type);
                ColumnMetadata {
                    name: row.name,
                    type_name,
                    nullable: !row.not_null,
                    default_value: row.default_value,
                    size,
                    remarks: None,
                }
            })
            .collect();

        Ok(columns)
    }

    fn primary_keys(
        &self,
        table: &str,
        schema: Option<&str>,
    ) -> Result<Vec<PrimaryKeyMetadata>> {
        let mut keys: Vec<_> = self
            .table_info(table, schema)?
            .into_iter()
            .filter(|row| row.primary_key > 0)
            .collect();
        keys.sort_by_key(|row| row.primary_key);

        Ok(keys
            .into_iter()
            .map(|row| PrimaryKeyMetadata {
                column_name: row.name,
            })
            .collect())
    }

    fn imported_keys(
        &self,
        table: &str,
        schema: Option<&str>,
    ) -> Result<Vec<ForeignKeyMetadata>> {
        let sql = match schema {
            Some(schema) => format!("PRAGMA {schema}.foreign_key_list(\"{table}\")"),
            None => format!("PRAGMA foreign_key_list(\"{table}\")"),
        };

        let operation = || format!("list imported keys for table `{table}`");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|err| Error::connectivity(operation(), err))?;

        let rows = stmt
            .query_map([], |row| {
                let pk_table: String = row.get("table")?;
                let fk_column: String = row.get("from")?;
                let pk_column: Option<String> = row.get("to")?;
                Ok((pk_table, fk_column, pk_column))
            })
            .map_err(|err| Error::connectivity(operation(), err))?;

        let mut keys = vec![];
        for row in rows {
            let (pk_table, fk_column, pk_column) =
                row.map_err(|err| Error::connectivity(operation(), err))?;

            // Sqlite reports a NULL target column when the key references
            // the parent's implicit primary key; those fall outside the
            // explicit-column contract.
            let Some(pk_column) = pk_column else {
                tracing::debug!(table, fk_column, "skipping foreign key with implicit target");
                continue;
            };

            keys.push(ForeignKeyMetadata {
                pk_table,
                pk_column,
                fk_table: table.to_owned(),
                fk_column,
            });
        }

        Ok(keys)
    }

    fn table_names(&self) -> Result<Vec<String>> {
        let operation = "list table names";

        let mut stmt = self
            .connection
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
            )
            .map_err(|err| Error::connectivity(operation, err))?;

        let rows = stmt
            .query_map([], |row| row.get(0))
            .map_err(|err| Error::connectivity(operation, err))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|err| Error::connectivity(operation, err))
    }

    fn execute(&self, sql: &str) -> Result<u64> {
        // Statement texts arrive newline-terminated; sqlite treats
        // anything after the terminator as a second statement.
        let sql = sql.trim_end();

        let changed = self
            .connection
            .execute(sql, [])
            .map_err(|err| Error::connectivity(format!("execute `{sql}`"), err))?;
        Ok(changed as u64)
    }

    fn query(&self, sql: &str) -> Result<Rows> {
        let operation = || format!("query `{sql}`");

        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(|err| Error::connectivity(operation(), err))?;
        let columns = stmt.column_count();

        let mut rows = stmt
            .query([])
            .map_err(|err| Error::connectivity(operation(), err))?;

        let mut out = vec![];
        while let Some(row) = rows.next().map_err(|err| Error::connectivity(operation(), err))? {
            let mut values = Vec::with_capacity(columns);
            for index in 0..columns {
                let cell = row
                    .get_ref(index)
                    .map_err(|err| Error::connectivity(operation(), err))?;
                values.push(value::from_sql(cell)?);
            }
            out.push(values);
        }

        Ok(Rows::new(columns, out))
    }
}

/// Splits a declared column type into its base name and size, e.g.
/// `VARCHAR(80)` into (`VARCHAR`, 80) and `DECIMAL(10,2)` into
/// (`DECIMAL`, 10).
fn split_type_decl(decl: &str) -> (String, u32) {
    let Some((base, rest)) = decl.split_once('(') else {
        return (decl.trim().to_owned(), 0);
    };

    let size = rest
        .trim_end_matches(')')
        .split(',')
        .next()
        .and_then(|size| size.trim().parse().ok())
        .unwrap_or(0);

    (base.trim().to_owned(), size)
}

//! DDL synthesis with optional execution.
//!
//! Pure text synthesis lives in `tabula-sql`; this layer adds the
//! `execute` switch and the batch variants. Execution failures wrap the
//! driver error as a ddl execution error and are never retried — DDL is
//! not idempotent-safe to retry blindly — and no rollback is attempted.

use crate::Registry;

use tabula_core::schema::app::Record;
use tabula_core::{Connection, Error, Result};
use tabula_sql::{create_statements, drop_statement, Serializer};

/// Synthesizes and optionally executes DDL for declared records.
pub struct Ddl<'a> {
    connection: &'a dyn Connection,
}

impl<'a> Ddl<'a> {
    pub fn new(connection: &'a dyn Connection) -> Self {
        Self { connection }
    }

    /// Returns the CREATE TABLE text for `record` — deferred one-to-many
    /// ALTERs included — executing each statement first when `execute`
    /// is set.
    ///
    /// The CREATE runs before the ALTERs, but an ALTER still targets the
    /// child table: when creating several related tables with
    /// `execute`, create parents before children so every child exists
    /// by the time its ALTER runs.
    pub fn create_table(&self, record: &Record, execute: bool) -> Result<String> {
        let serializer = Serializer;
        let mut sql = String::new();

        for statement in create_statements(record)? {
            let text = serializer.serialize(&statement);
            if execute {
                self.run(&text)?;
            }
            sql.push_str(&text);
        }

        Ok(sql)
    }

    /// Batch variant of [`create_table`](Self::create_table). Callers
    /// supply records in dependency order, parents first.
    pub fn create_tables(&self, records: &[&Record], execute: bool) -> Result<String> {
        let mut sql = String::new();

        for record in records {
            sql.push_str(&self.create_table(record, execute)?);
            sql.push('\n');
        }

        Ok(sql)
    }

    /// Creates every registered record's table, in registration order.
    pub fn create_all(&self, registry: &Registry, execute: bool) -> Result<String> {
        let records: Vec<_> = registry.records().collect();
        self.create_tables(&records, execute)
    }

    /// Returns the DROP TABLE text for `record`, executing it first when
    /// `execute` is set. A table-name override on the record is emitted
    /// verbatim.
    pub fn drop_table(&self, record: &Record, execute: bool) -> Result<String> {
        let text = Serializer.serialize(&drop_statement(record));

        if execute {
            self.run(&text)?;
        }

        Ok(text)
    }

    /// Batch variant of [`drop_table`](Self::drop_table). With foreign
    /// keys in place, callers supply records in dependency order,
    /// children first.
    pub fn drop_tables(&self, records: &[&Record], execute: bool) -> Result<String> {
        let mut sql = String::new();

        for record in records {
            sql.push_str(&self.drop_table(record, execute)?);
            sql.push('\n');
        }

        Ok(sql)
    }

    /// Drops every registered record's table, in reverse registration
    /// order (children registered last drop first).
    pub fn drop_all(&self, registry: &Registry, execute: bool) -> Result<String> {
        let records: Vec<_> = registry.records().rev().collect();
        self.drop_tables(&records, execute)
    }

    fn run(&self, sql: &str) -> Result<()> {
        tracing::debug!(sql = sql.trim_end(), "executing ddl");
        self.connection
            .execute(sql)
            .map_err(|err| Error::ddl_execution(sql, err))?;
        Ok(())
    }
}

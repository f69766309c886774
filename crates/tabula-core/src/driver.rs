use crate::{Result, Value};

/// A database connection, as seen by the core.
///
/// The contract is the platform metadata facility plus plain statement
/// execution: list columns, list primary keys, list imported (foreign)
/// keys, execute DDL, and run a query yielding a positional cursor.
/// Implementations live in driver crates; every method is blocking and
/// failures are reported as connectivity errors, never retried here.
pub trait Connection {
    /// Lists the columns of `table`, optionally scoped to `schema`, in
    /// ordinal order.
    fn columns(&self, table: &str, schema: Option<&str>) -> Result<Vec<ColumnMetadata>>;

    /// Lists the primary-key columns of `table`.
    ///
    /// Zero rows means the table declares no primary key; that is not an
    /// error.
    fn primary_keys(&self, table: &str, schema: Option<&str>)
        -> Result<Vec<PrimaryKeyMetadata>>;

    /// Lists the foreign keys imported by `table` (keys on `table` that
    /// reference other tables' primary keys).
    fn imported_keys(&self, table: &str, schema: Option<&str>)
        -> Result<Vec<ForeignKeyMetadata>>;

    /// The comment attached to `table`, if the platform records one.
    fn table_comment(&self, _table: &str, _schema: Option<&str>) -> Result<Option<String>> {
        Ok(None)
    }

    /// Lists all table names visible on the connection.
    fn table_names(&self) -> Result<Vec<String>>;

    /// Executes a statement that returns no rows (DDL, updates) and
    /// returns the affected row count.
    fn execute(&self, sql: &str) -> Result<u64>;

    /// Runs a query and returns its full result as a positional cursor.
    fn query(&self, sql: &str) -> Result<Rows>;
}

/// One row of the "list columns" metadata result.
#[derive(Debug, Clone)]
pub struct ColumnMetadata {
    /// Column name, exactly as reported by the platform.
    pub name: String,

    /// SQL type name without size decoration, e.g. `varchar`, `bigint`.
    pub type_name: String,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// Declared default value, if any.
    pub default_value: Option<String>,

    /// String length or numeric precision; 0 when not applicable.
    pub size: u32,

    /// Column remarks, if the platform records them.
    pub remarks: Option<String>,
}

/// One row of the "list primary keys" metadata result.
#[derive(Debug, Clone)]
pub struct PrimaryKeyMetadata {
    pub column_name: String,
}

/// One row of the "list imported keys" metadata result.
#[derive(Debug, Clone)]
pub struct ForeignKeyMetadata {
    /// Table owning the referenced primary key.
    pub pk_table: String,

    /// Referenced primary-key column.
    pub pk_column: String,

    /// Table owning the foreign-key column (the introspected table).
    pub fk_table: String,

    /// Foreign-key column on the introspected table.
    pub fk_column: String,
}

/// A fully-materialized positional cursor: a column count plus zero or
/// more rows of values, one value per column, 0-indexed in storage and
/// bound 1-indexed by the projection layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    columns: usize,
    rows: Vec<Vec<Value>>,
}

impl Rows {
    /// Creates a cursor over `rows`, each of which must hold exactly
    /// `columns` values.
    pub fn new(columns: usize, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns));
        Self { columns, rows }
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    pub fn into_rows(self) -> std::vec::IntoIter<Vec<Value>> {
        self.rows.into_iter()
    }
}

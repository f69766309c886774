/// One column declaration inside a CREATE TABLE statement.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,

    /// Rendered SQL type, e.g. `BIGINT`, `VARCHAR(80)`.
    pub ty: String,

    pub not_null: bool,

    pub key: KeyClause,
}

/// The key clause appended to a column declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClause {
    None,

    /// `PRIMARY KEY` — application-assigned key values.
    PrimaryKey,

    /// `AUTO_INCREMENT PRIMARY KEY` — database-assigned key values.
    AutoIncrementPrimaryKey,
}

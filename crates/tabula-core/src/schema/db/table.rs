use super::ColumnDescription;

/// A description of a database table: name, optional schema, comment,
/// and an ordered list of column descriptions.
///
/// Constructed once per introspection call and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescription {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub comment: Option<String>,
    pub columns: Vec<ColumnDescription>,
}

impl TableDescription {
    pub fn new(
        table_name: impl Into<String>,
        schema_name: Option<String>,
        comment: Option<String>,
        columns: Vec<ColumnDescription>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            schema_name,
            comment,
            columns,
        }
    }

    /// All column names, in ordinal order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Looks up a column description by exact name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescription> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The columns that are part of the primary key.
    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnDescription> {
        self.columns.iter().filter(|column| column.primary_key)
    }

    /// The columns that are foreign keys.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &ColumnDescription> {
        self.columns.iter().filter(|column| column.foreign_key)
    }
}

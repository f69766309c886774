/// A description of one column in a database table.
///
/// Immutable once built. The key flags arrive in separate metadata
/// passes, so construction goes through [`ColumnBuilder`], which is
/// mutated during introspection and then frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescription {
    /// Column name, exactly as reported by the platform.
    pub name: String,

    /// SQL type name, e.g. `bigint`, `varchar`.
    pub sql_type: String,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// True if the column is part of the table's primary key.
    pub primary_key: bool,

    /// True if the column references another table's primary key. When
    /// set, both referenced fields are set as well.
    pub foreign_key: bool,

    /// Table referenced by the foreign key.
    pub referenced_table: Option<String>,

    /// Column referenced by the foreign key.
    pub referenced_column: Option<String>,

    /// String length or numeric precision; 0 when not applicable.
    pub size: u32,

    /// Declared default value, if any.
    pub default_value: Option<String>,

    /// Column remarks, if the platform records them.
    pub comment: Option<String>,
}

/// Mutable builder for [`ColumnDescription`].
///
/// Pass one seeds the base column data; passes two and three mark key
/// flags on matching builders. `freeze` produces the immutable value.
/// A foreign-key mark always carries its referenced table and column,
/// so the frozen value cannot violate the foreign-key invariant.
#[derive(Debug)]
pub struct ColumnBuilder {
    name: String,
    sql_type: String,
    nullable: bool,
    size: u32,
    default_value: Option<String>,
    comment: Option<String>,
    primary_key: bool,
    foreign_key: Option<(String, String)>,
}

impl ColumnBuilder {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            size: 0,
            default_value: None,
            comment: None,
            primary_key: false,
            foreign_key: None,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The column name, for matching against key metadata rows.
    /// Matching is case-sensitive, as returned by the platform.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks the column as part of the primary key (pass two).
    pub fn mark_primary_key(&mut self) {
        self.primary_key = true;
    }

    /// Marks the column as a foreign key referencing `table.column`
    /// (pass three).
    pub fn mark_foreign_key(&mut self, table: impl Into<String>, column: impl Into<String>) {
        self.foreign_key = Some((table.into(), column.into()));
    }

    /// Freezes the builder into an immutable [`ColumnDescription`].
    pub fn freeze(self) -> ColumnDescription {
        let (referenced_table, referenced_column) = match self.foreign_key {
            Some((table, column)) => (Some(table), Some(column)),
            None => (None, None),
        };

        ColumnDescription {
            name: self.name,
            sql_type: self.sql_type,
            nullable: self.nullable,
            primary_key: self.primary_key,
            foreign_key: referenced_table.is_some(),
            referenced_table,
            referenced_column,
            size: self.size,
            default_value: self.default_value,
            comment: self.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freeze_without_marks() {
        let column = ColumnBuilder::new("street", "varchar").size(80).freeze();
        assert!(!column.primary_key);
        assert!(!column.foreign_key);
        assert_eq!(column.referenced_table, None);
        assert!(column.nullable);
    }

    #[test]
    fn foreign_key_mark_carries_reference() {
        let mut builder = ColumnBuilder::new("listing_id", "bigint").nullable(false);
        builder.mark_foreign_key("listing", "id");
        let column = builder.freeze();
        assert!(column.foreign_key);
        assert_eq!(column.referenced_table.as_deref(), Some("listing"));
        assert_eq!(column.referenced_column.as_deref(), Some("id"));
    }

    #[test]
    fn primary_and_foreign_are_independent() {
        let mut builder = ColumnBuilder::new("id", "bigint");
        builder.mark_primary_key();
        builder.mark_foreign_key("parent", "id");
        let column = builder.freeze();
        assert!(column.primary_key && column.foreign_key);
    }
}

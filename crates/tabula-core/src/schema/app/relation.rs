use super::FieldType;
use crate::schema::Name;

/// The "one" side of a one-to-one relationship.
///
/// The owning record stores a join column referencing the target's
/// primary key; the column is typed to match that key, not the declaring
/// field's own type.
#[derive(Debug, Clone)]
pub struct HasOne {
    /// Target record type name.
    pub target: Name,

    /// Target table name; defaults to the target name in snake_case.
    pub target_table: String,

    /// Join column on the owning table.
    pub column: String,

    /// Primary-key column on the target table.
    pub references: String,

    /// The target primary key's field type, used to type the join
    /// column.
    pub target_pk_ty: FieldType,

    /// Size constraint of the target primary key, for string keys.
    pub target_pk_size: Option<u32>,
}

impl HasOne {
    pub fn new(
        target: &str,
        column: impl Into<String>,
        references: impl Into<String>,
        target_pk_ty: FieldType,
    ) -> Self {
        let target = Name::new(target);
        Self {
            target_table: target.snake_case(),
            target,
            column: column.into(),
            references: references.into(),
            target_pk_ty,
            target_pk_size: None,
        }
    }

    pub fn target_table(mut self, target_table: impl Into<String>) -> Self {
        self.target_table = target_table.into();
        self
    }

    pub fn target_pk_size(mut self, size: u32) -> Self {
        self.target_pk_size = Some(size);
        self
    }
}

/// A one-to-many relationship, declared on the parent.
///
/// The join column lives on the child table, so the parent's CREATE
/// emits no column for it; wiring happens through a deferred ALTER on
/// the child.
#[derive(Debug, Clone)]
pub struct HasMany {
    /// Child record type name.
    pub target: Name,

    /// Child table name; defaults to the target name in snake_case.
    pub target_table: String,

    /// Join column on the child table.
    pub column: String,

    /// Referenced column on the parent table.
    pub references: String,
}

impl HasMany {
    pub fn new(
        target: &str,
        column: impl Into<String>,
        references: impl Into<String>,
    ) -> Self {
        let target = Name::new(target);
        Self {
            target_table: target.snake_case(),
            target,
            column: column.into(),
            references: references.into(),
        }
    }

    pub fn target_table(mut self, target_table: impl Into<String>) -> Self {
        self.target_table = target_table.into();
        self
    }
}

use super::{FieldType, GenerationStrategy, HasMany, HasOne};
use crate::schema::Name;

/// One declared field of a record.
#[derive(Debug, Clone)]
pub struct Field {
    /// The field name, as declared in code.
    pub name: String,

    /// Explicit column-name override. When absent, the column name is
    /// the field name converted to the schema's snake_case convention.
    pub column: Option<String>,

    /// Scalar, one-to-one, or one-to-many.
    pub ty: FieldTy,

    /// True if the column accepts NULL. A field is NOT NULL when it is
    /// the primary key or carries an explicit not-null constraint.
    pub nullable: bool,

    /// True if the field is the record's primary key.
    pub primary_key: bool,

    /// How the value is generated for new rows, if declared.
    pub auto: Option<GenerationStrategy>,

    /// Transient fields produce no column.
    pub transient: bool,

    /// Declared maximum length for string fields.
    pub size: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Scalar(FieldType),
    HasOne(HasOne),
    HasMany(HasMany),
}

impl Field {
    /// A plain scalar field, nullable by default.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self::with_ty(name, FieldTy::Scalar(ty))
    }

    /// The record's primary key. NOT NULL; generation defaults to none
    /// (plain `PRIMARY KEY`) until [`auto`](Self::auto) declares one.
    pub fn primary_key(name: impl Into<String>, ty: FieldType) -> Self {
        let mut field = Self::new(name, ty);
        field.primary_key = true;
        field.nullable = false;
        field
    }

    /// The "one" side of a one-to-one relationship. The field renders as
    /// a join column typed to the target's primary key.
    pub fn has_one(name: impl Into<String>, has_one: HasOne) -> Self {
        Self::with_ty(name, FieldTy::HasOne(has_one))
    }

    /// A one-to-many relationship. Produces no column on this record's
    /// table; the join column lives on the child.
    pub fn has_many(name: impl Into<String>, has_many: HasMany) -> Self {
        Self::with_ty(name, FieldTy::HasMany(has_many))
    }

    fn with_ty(name: impl Into<String>, ty: FieldTy) -> Self {
        Self {
            name: name.into(),
            column: None,
            ty,
            nullable: true,
            primary_key: false,
            auto: None,
            transient: false,
            size: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn auto(mut self, auto: GenerationStrategy) -> Self {
        self.auto = Some(auto);
        self
    }

    /// The column name this field maps to: the explicit override, or the
    /// field name in snake_case.
    pub fn column_name(&self) -> String {
        match &self.column {
            Some(column) => column.clone(),
            None => Name::new(&self.name).snake_case(),
        }
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto.map(|auto| auto.is_auto()).unwrap_or(false)
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldTy::HasOne(..) | FieldTy::HasMany(..))
    }
}

impl FieldTy {
    pub fn as_scalar(&self) -> Option<&FieldType> {
        match self {
            Self::Scalar(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_has_one(&self) -> Option<&HasOne> {
        match self {
            Self::HasOne(has_one) => Some(has_one),
            _ => None,
        }
    }

    pub fn as_has_many(&self) -> Option<&HasMany> {
        match self {
            Self::HasMany(has_many) => Some(has_many),
            _ => None,
        }
    }
}

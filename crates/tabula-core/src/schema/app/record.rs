use super::Field;
use crate::schema::Name;

/// A declared record type: the code-side description of one table row.
#[derive(Debug, Clone)]
pub struct Record {
    /// Record type name.
    pub name: Name,

    /// Explicit table-name override. When absent, the table is the
    /// record name in the schema's snake_case convention.
    pub table: Option<String>,

    /// Declared fields, in declaration order.
    pub fields: Vec<Field>,
}

impl Record {
    pub fn builder(name: &str) -> RecordBuilder {
        RecordBuilder {
            name: Name::new(name),
            table: None,
            fields: vec![],
        }
    }

    /// The table this record maps to. An explicit override is used
    /// verbatim.
    pub fn table_name(&self) -> String {
        match &self.table {
            Some(table) => table.clone(),
            None => self.name.snake_case(),
        }
    }

    /// Looks up a field by declared name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The record's primary-key field, if declared.
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.primary_key)
    }
}

/// Builder for [`Record`] declarations.
#[derive(Debug)]
pub struct RecordBuilder {
    name: Name,
    table: Option<String>,
    fields: Vec<Field>,
}

impl RecordBuilder {
    /// Overrides the table name. Used verbatim in generated DDL.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Record {
        Record {
            name: self.name,
            table: self.table,
            fields: self.fields,
        }
    }
}

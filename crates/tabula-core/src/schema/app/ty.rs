use crate::{Error, Result};

/// Code-side type vocabulary for declared record fields.
///
/// The mapping to and from SQL type names is a closed table. Anything
/// outside it fails loudly; silently coercing an unknown type would
/// corrupt generated code or generated DDL.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// 32-bit signed integer
    I32,

    /// 64-bit signed integer
    I64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Variable-length string; columns require a declared maximum length
    String,

    /// Civil calendar date
    Date,

    /// Civil date-time
    DateTime,

    /// Enumerated type with a fixed label set
    Enum(EnumType),
}

/// An enumerated field's label set and column encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub labels: Vec<String>,
    pub encoding: EnumEncoding,
}

/// How an enumerated field is stored in its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEncoding {
    /// Stored as the variant's ordinal, in an integer column.
    Ordinal,

    /// Stored as the variant's label, in a string column sized to the
    /// longest label.
    Name,
}

impl EnumType {
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>, encoding: EnumEncoding) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            encoding,
        }
    }
}

impl FieldType {
    /// Maps a SQL type name reported by the database to the field type
    /// generated for it.
    ///
    /// Case-insensitive on the SQL side. Unknown names fail with an
    /// unsupported type error naming the input.
    pub fn from_sql_type(sql_type: &str) -> Result<FieldType> {
        match sql_type.to_ascii_lowercase().as_str() {
            "bigint" => Ok(FieldType::I64),
            "varchar" | "char" => Ok(FieldType::String),
            "decimal" | "double" => Ok(FieldType::F64),
            "date" => Ok(FieldType::Date),
            "timestamp" => Ok(FieldType::DateTime),
            "int" | "integer" | "bit" => Ok(FieldType::I32),
            _ => Err(Error::unsupported_type(sql_type)),
        }
    }

    /// Derives the SQL column type for a field of this type.
    ///
    /// `field_name` drives the date-time storage heuristic: a field
    /// whose name contains `timestamp` (case-insensitive) maps to
    /// `TIMESTAMP`, any other date-time field to `DATETIME`. `size` is
    /// the declared maximum length for string fields; a string field
    /// without one fails rather than receiving an invented default.
    pub fn sql_type(&self, field_name: &str, size: Option<u32>) -> Result<String> {
        match self {
            FieldType::I32 => Ok("INT".into()),
            FieldType::I64 => Ok("BIGINT".into()),
            FieldType::F32 => Ok("FLOAT".into()),
            FieldType::F64 => Ok("DOUBLE".into()),
            FieldType::Date => Ok("DATE".into()),
            FieldType::DateTime => {
                if field_name.to_ascii_lowercase().contains("timestamp") {
                    Ok("TIMESTAMP".into())
                } else {
                    Ok("DATETIME".into())
                }
            }
            FieldType::String => match size {
                Some(size) if size > 0 => Ok(format!("VARCHAR({size})")),
                _ => Err(Error::missing_size_constraint(field_name)),
            },
            FieldType::Enum(ty) => match ty.encoding {
                EnumEncoding::Ordinal => Ok("INT".into()),
                EnumEncoding::Name => {
                    let longest = ty.labels.iter().map(|label| label.len()).max().unwrap_or(0);
                    Ok(format!("VARCHAR({longest})"))
                }
            },
        }
    }
}

use super::Error;

/// Error when a SQL type name has no mapping in the closed type table.
///
/// Silent coercion would corrupt generated code, so this is fatal and
/// names the offending type.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    sql_type: Box<str>,
}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported sql type: {}", self.sql_type)
    }
}

impl Error {
    /// Creates an unsupported type error naming the SQL type that has no
    /// field type mapping.
    pub fn unsupported_type(sql_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            sql_type: sql_type.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}

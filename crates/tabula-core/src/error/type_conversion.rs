use super::Error;
use crate::value::Value;

/// Error when a cursor value cannot be converted to the requested slot
/// type.
///
/// Tuple projection performs no coercion; a witness/actual mismatch
/// surfaces here, at the binding site.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    value: &'static str,
    target: &'static str,
}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.value, self.target)
    }
}

impl Error {
    /// Creates a type conversion error from the value's variant and the
    /// requested target type name.
    pub fn type_conversion(value: &Value, target: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            value: value.kind(),
            target,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}

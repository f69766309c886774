use super::Error;

/// Error when a string field declares no maximum length.
///
/// There is no implicit default length; inventing one could silently
/// truncate data once the column exists.
#[derive(Debug)]
pub(super) struct MissingSizeConstraintError {
    field: Box<str>,
}

impl core::fmt::Display for MissingSizeConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "string field `{}` must declare a maximum length", self.field)
    }
}

impl Error {
    /// Creates a missing size constraint error naming the string field.
    pub fn missing_size_constraint(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingSizeConstraint(
            MissingSizeConstraintError {
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing size constraint error.
    pub fn is_missing_size_constraint(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingSizeConstraint(_))
    }
}

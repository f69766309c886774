use super::Error;

/// Error when a single-row projection produces more than one row.
#[derive(Debug)]
pub(super) struct TooManyRowsError {
    context: Box<str>,
}

impl core::fmt::Display for TooManyRowsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "too many rows: {}", self.context)
    }
}

impl Error {
    /// Creates a too many rows error.
    ///
    /// The context parameter describes the operation whose cardinality
    /// assumption was violated.
    pub fn too_many_rows(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TooManyRows(TooManyRowsError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is a too many rows error.
    pub fn is_too_many_rows(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyRows(_))
    }
}

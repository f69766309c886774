use super::Error;

/// Error when a cursor's column count does not match the requested tuple
/// arity.
///
/// Raised before any row is read, regardless of row count.
#[derive(Debug)]
pub(super) struct ArityMismatchError {
    expected: usize,
    actual: usize,
}

impl core::fmt::Display for ArityMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column count mismatch: expected {}, cursor produced {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an arity mismatch error.
    pub fn arity_mismatch(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::ArityMismatch(ArityMismatchError {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an arity mismatch error.
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ArityMismatch(_))
    }
}

mod arity_mismatch;
mod connectivity;
mod ddl_execution;
mod missing_size_constraint;
mod too_many_rows;
mod type_conversion;
mod unsupported_type;

use arity_mismatch::ArityMismatchError;
use connectivity::ConnectivityError;
use ddl_execution::DdlExecutionError;
use missing_size_constraint::MissingSizeConstraintError;
use too_many_rows::TooManyRowsError;
use type_conversion::TypeConversionError;
use unsupported_type::UnsupportedTypeError;

/// An error that can occur in tabula.
///
/// Errors carry the exact failing SQL type name, field name, table name,
/// or statement so the caller can fix the declaration or query without
/// re-deriving context. Nothing in this crate retries or recovers; every
/// error propagates to the caller, which owns transaction boundaries and
/// retry policy.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(anyhow::Error),
    ArityMismatch(ArityMismatchError),
    Connectivity(ConnectivityError),
    DdlExecution(DdlExecutionError),
    MissingSizeConstraint(MissingSizeConstraintError),
    TooManyRows(TooManyRowsError),
    TypeConversion(TypeConversionError),
    UnsupportedType(UnsupportedTypeError),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Adhoc(err) => Some(err.as_ref()),
            ErrorKind::Connectivity(err) => Some(err.source()),
            ErrorKind::DdlExecution(err) => Some(err.source()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self.kind() {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ArityMismatch(err) => core::fmt::Display::fmt(err, f),
            Connectivity(err) => core::fmt::Display::fmt(err, f),
            DdlExecution(err) => core::fmt::Display::fmt(err, f),
            MissingSizeConstraint(err) => core::fmt::Display::fmt(err, f),
            TooManyRows(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Adhoc(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let err = Error::unsupported_type("clob");
        assert_eq!(err.to_string(), "unsupported sql type: clob");

        let err = Error::missing_size_constraint("name");
        assert_eq!(
            err.to_string(),
            "string field `name` must declare a maximum length"
        );

        let err = Error::arity_mismatch(3, 5);
        assert_eq!(
            err.to_string(),
            "column count mismatch: expected 3, cursor produced 5"
        );
    }

    #[test]
    fn predicates_match_kind() {
        assert!(Error::unsupported_type("clob").is_unsupported_type());
        assert!(!Error::unsupported_type("clob").is_arity_mismatch());
        assert!(Error::too_many_rows("ctx").is_too_many_rows());
    }

    #[test]
    fn source_chains_the_driver_error() {
        let inner = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed");
        let err = Error::connectivity("list columns for `t`", inner);
        assert!(err.is_connectivity());
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("socket closed"));
    }
}

use super::Error;

/// Error when executing a CREATE, ALTER, or DROP statement fails.
///
/// The statement text is preserved along with the driver error. DDL is
/// not safe to retry blindly and no rollback is attempted here.
#[derive(Debug)]
pub(super) struct DdlExecutionError {
    sql: Box<str>,
    source: anyhow::Error,
}

impl DdlExecutionError {
    pub(super) fn source(&self) -> &(dyn std::error::Error + 'static) {
        self.source.as_ref()
    }
}

impl core::fmt::Display for DdlExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "ddl execution failed: {}: {}", self.sql.trim_end(), self.source)
    }
}

impl Error {
    /// Creates a ddl execution error wrapping the driver error for the
    /// given statement.
    pub fn ddl_execution(sql: impl Into<String>, source: impl Into<anyhow::Error>) -> Error {
        Error::from(super::ErrorKind::DdlExecution(DdlExecutionError {
            sql: sql.into().into(),
            source: source.into(),
        }))
    }

    /// Returns `true` if this error is a ddl execution error.
    pub fn is_ddl_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DdlExecution(_))
    }
}

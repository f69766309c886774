use super::Error;

/// Error when a metadata or query call fails against the underlying
/// connection.
///
/// Fatal from the core's point of view: the failing operation is named,
/// the driver error is preserved as the source, and nothing is retried.
#[derive(Debug)]
pub(super) struct ConnectivityError {
    operation: Box<str>,
    source: anyhow::Error,
}

impl ConnectivityError {
    pub(super) fn source(&self) -> &(dyn std::error::Error + 'static) {
        self.source.as_ref()
    }
}

impl core::fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection failure during {}: {}", self.operation, self.source)
    }
}

impl Error {
    /// Creates a connectivity error.
    ///
    /// `operation` describes the metadata or query call that failed, e.g.
    /// `list columns for table `address``.
    pub fn connectivity(
        operation: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Error {
        Error::from(super::ErrorKind::Connectivity(ConnectivityError {
            operation: operation.into().into(),
            source: source.into(),
        }))
    }

    /// Returns `true` if this error is a connectivity error.
    pub fn is_connectivity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Connectivity(_))
    }
}

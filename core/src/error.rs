//! Error types for export operations

use thiserror::Error;

/// Main error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// The request did not carry a usable row matrix
    #[error("{message}")]
    InvalidRows {
        /// Human-readable message returned to the caller
        message: String,
    },

    /// The spreadsheet library rejected the input or failed to serialize
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// The request used a method other than POST
    #[error("Method {method} not allowed")]
    MethodNotAllowed {
        /// Method that was received
        method: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Runtime or adapter errors
    #[error("Service error: {0}")]
    Service(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Create a new invalid-rows error
    #[must_use]
    pub fn invalid_rows(message: impl Into<String>) -> Self {
        Self::InvalidRows {
            message: message.into(),
        }
    }

    /// Create a new encoding error
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding(message.into())
    }

    /// Create a method-not-allowed error
    #[must_use]
    pub fn method_not_allowed(method: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            method: method.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new service error
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the error was caused by the caller's input rather than the server
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRows { .. } | Self::MethodNotAllowed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rows_display_is_bare_message() {
        let err = ExportError::invalid_rows("rows must be an array");
        assert_eq!(err.to_string(), "rows must be an array");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_encoding_is_server_error() {
        let err = ExportError::encoding("string too long");
        assert!(err.to_string().contains("string too long"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_conversions() {
        let io_err = std::io::Error::other("disk full");
        let export_err: ExportError = io_err.into();
        assert!(matches!(export_err, ExportError::Io(_)));
    }
}

//! Error handling for the filament scale companion.
//!
//! Provides error types for the two layers that can fail:
//! - Reading errors (raw payloads that carry no numeric value)
//! - Transport errors (plugin API requests)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Reading error type
///
/// Represents failures to interpret a raw weight payload pushed by the host.
#[derive(Error, Debug, Clone)]
pub enum ReadingError {
    /// The payload carried no numeric prefix, presumed to indicate
    /// sensor or calibration trouble on the scale side.
    #[error("Raw reading is not numeric: {raw:?}")]
    NotNumeric {
        /// The raw payload as received.
        raw: String,
    },
}

/// Transport error type
///
/// Represents errors while talking to the plugin HTTP API.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// The configured host URL could not form a valid endpoint.
    #[error("Invalid plugin endpoint: {url}")]
    InvalidEndpoint {
        /// The offending URL.
        url: String,
    },

    /// The request never produced a response.
    #[error("Request failed: {reason}")]
    RequestFailed {
        /// Why the request failed (connection refused, DNS, ...).
        reason: String,
    },

    /// The plugin API answered with a non-success status.
    #[error("Plugin API returned HTTP {status}")]
    ErrorStatus {
        /// The HTTP status code received.
        status: u16,
    },

    /// The response body could not be read as text.
    #[error("Unreadable response body: {reason}")]
    BadBody {
        /// Why the body could not be read.
        reason: String,
    },
}

/// Main error type for the filament scale companion
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading error
    #[error(transparent)]
    Reading(#[from] ReadingError),

    /// Transport error
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a transport error
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is a reading error
    pub fn is_reading_error(&self) -> bool {
        matches!(self, Error::Reading(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_error_display() {
        let err = ReadingError::NotNumeric {
            raw: "NaN".to_string(),
        };
        assert_eq!(err.to_string(), "Raw reading is not numeric: \"NaN\"");
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::ErrorStatus { status: 502 };
        assert_eq!(err.to_string(), "Plugin API returned HTTP 502");

        let err = TransportError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ReadingError::NotNumeric {
            raw: "-".to_string(),
        }
        .into();
        assert!(err.is_reading_error());
        assert!(!err.is_transport_error());

        let err: Error = TransportError::ErrorStatus { status: 404 }.into();
        assert!(err.is_transport_error());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_other_error() {
        let err = Error::other("scale offline");
        assert_eq!(err.to_string(), "scale offline");
    }
}

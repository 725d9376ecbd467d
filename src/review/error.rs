//! Error types exposed by the review client.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the review
/// service.
///
/// Request failures are not retried or reclassified. Transport failures keep
/// the original [`reqwest::Error`] as their source.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The configured base address could not be used.
    #[error("review service address is invalid: {address}: {message}")]
    InvalidBaseAddress {
        /// Address as supplied by the caller.
        address: String,
        /// Why the address was rejected.
        message: String,
    },

    /// A configured default header has an invalid name or value.
    #[error("invalid default header {name}: {message}")]
    InvalidHeader {
        /// Header name as supplied by the caller.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// Networking failed (connection refused, DNS, timeout, body decoding).
    #[error("network error talking to review service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The review service answered with a non-success status.
    #[error("review service returned {status}: {body}")]
    Status {
        /// HTTP status returned by the service.
        status: StatusCode,
        /// Response body, truncated for display.
        body: String,
    },

    /// A stream response did not declare `text/event-stream`.
    #[error("expected an event stream but the service sent {content_type}")]
    InvalidContentType {
        /// Content type sent by the service, or `(none)`.
        content_type: String,
    },

    /// A stream was opened outside a Tokio runtime.
    #[error("an analysis stream requires a running Tokio runtime")]
    NoRuntime,

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ReviewError {
    /// Returns true when the failure was the per-client timeout elapsing.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(error) if error.is_timeout())
    }

    /// Returns the HTTP status for [`ReviewError::Status`] failures.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

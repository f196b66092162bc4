//! Shared error type across pointless crates.

use thiserror::Error;

/// Stable error codes, used in logs and asserted on by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration or input.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Peer address is not in `host:port` form.
    BadAddress,
    /// A host metric could not be sampled.
    SampleUnavailable,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::BadAddress => "BAD_ADDRESS",
            ErrorCode::SampleUnavailable => "SAMPLE_UNAVAILABLE",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PointlessError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum PointlessError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("address {addr:?}: {reason}")]
    BadAddress { addr: String, reason: &'static str },
    #[error("{metric} sample unavailable: {reason}")]
    SampleUnavailable { metric: &'static str, reason: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl PointlessError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PointlessError::BadRequest(_) => ErrorCode::BadRequest,
            PointlessError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            PointlessError::BadAddress { .. } => ErrorCode::BadAddress,
            PointlessError::SampleUnavailable { .. } => ErrorCode::SampleUnavailable,
            PointlessError::Internal(_) => ErrorCode::Internal,
        }
    }

    pub(crate) fn bad_address(addr: &str, reason: &'static str) -> Self {
        PointlessError::BadAddress {
            addr: addr.to_string(),
            reason,
        }
    }
}

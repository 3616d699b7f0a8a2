//! Error handling for the output runtime

use libc::c_int;
use std::io;

/// Result code returned across the C ABI when a call fails (C `EOF`).
pub const WRITE_FAILED: c_int = -1;

/// Error codes
pub const ERROR_IO: c_int = 1;
pub const ERROR_INVALID_ARGUMENT: c_int = 4;

/// Failure of a single gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The sink rejected or partially failed the write
    SinkWrite {
        kind: io::ErrorKind,
        message: String,
    },
    /// The write was accepted but the buffered bytes could not be delivered
    SinkFlush {
        kind: io::ErrorKind,
        message: String,
    },
    /// A null message pointer was paired with a non-zero length
    NullMessage { len: usize },
}

impl GatewayError {
    pub(crate) fn write(err: io::Error) -> Self {
        GatewayError::SinkWrite {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub(crate) fn flush(err: io::Error) -> Self {
        GatewayError::SinkFlush {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Numeric error code for diagnostics.
    pub fn code(&self) -> c_int {
        match self {
            GatewayError::SinkWrite { .. } | GatewayError::SinkFlush { .. } => ERROR_IO,
            GatewayError::NullMessage { .. } => ERROR_INVALID_ARGUMENT,
        }
    }

    /// The underlying I/O error kind, if the sink produced one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            GatewayError::SinkWrite { kind, .. } | GatewayError::SinkFlush { kind, .. } => {
                Some(*kind)
            }
            GatewayError::NullMessage { .. } => None,
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::SinkWrite { message, .. } => {
                write!(f, "write to sink failed: {}", message)
            }
            GatewayError::SinkFlush { message, .. } => {
                write!(f, "flush of sink failed: {}", message)
            }
            GatewayError::NullMessage { len } => {
                write!(f, "null message pointer with length {}", len)
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, GatewayError>;

//! Error types for NVP message construction and delivery.
//!
//! Construction errors ([`NvpError::Validation`], [`NvpError::TypeMismatch`])
//! are raised by the setter or constructor that detected them. Transport
//! errors are only produced by [`Transport`](crate::transport::Transport)
//! implementations; the client logs them and degrades to "no response".

/// Error codes for callers that need a stable numeric classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum NvpErrorCode {
    /// Feature not compiled in
    Unimplemented = 1000,
    /// Transport/network layer error
    Transport = 2000,
    /// Connection failed
    ConnectionFailed = 2001,
    /// Connection timeout
    ConnectionTimeout = 2002,
    /// Field failed validation
    Validation = 5001,
    /// Value of the wrong kind passed to a formatter
    TypeMismatch = 5003,
    /// Configuration or credentials missing/invalid
    Config = 7000,
}

/// Error type for NVP operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NvpError {
    /// Feature not compiled in.
    #[error("{0} is not available in this build")]
    Unimplemented(&'static str),

    /// Field value rejected by a setter or constructor.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Field or parameter name
        field: String,
        /// Reason for rejection
        reason: String,
    },

    /// A formatter received a value of the wrong kind.
    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        /// Kind the formatter accepts
        expected: &'static str,
        /// Kind it received
        found: &'static str,
    },

    /// Transport/network layer error.
    #[error("transport error: {0}")]
    Transport(String),

    /// Connection failed.
    #[error("connection to {target} failed: {reason}")]
    ConnectionFailed {
        /// Target endpoint
        target: String,
        /// Underlying error message
        reason: String,
    },

    /// Connection timeout.
    #[error("{operation} timed out after {timeout_ms}ms")]
    ConnectionTimeout {
        /// Operation that timed out
        operation: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Configuration or credentials could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl NvpError {
    /// Get the numeric error code.
    pub fn code(&self) -> NvpErrorCode {
        match self {
            Self::Unimplemented(_) => NvpErrorCode::Unimplemented,
            Self::Validation { .. } => NvpErrorCode::Validation,
            Self::TypeMismatch { .. } => NvpErrorCode::TypeMismatch,
            Self::Transport(_) => NvpErrorCode::Transport,
            Self::ConnectionFailed { .. } => NvpErrorCode::ConnectionFailed,
            Self::ConnectionTimeout { .. } => NvpErrorCode::ConnectionTimeout,
            Self::Config(_) => NvpErrorCode::Config,
        }
    }

    /// Returns true for transport-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::ConnectionFailed { .. } | Self::ConnectionTimeout { .. }
        )
    }

    /// Create a validation error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error from any error type.
    pub fn transport<E: std::error::Error>(err: E) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = NvpError::validation("TOKEN", "must be exactly 20 characters");
        assert_eq!(err.code(), NvpErrorCode::Validation);
        assert!(!err.is_transport());

        let err = NvpError::ConnectionTimeout {
            operation: "NVP POST".to_string(),
            timeout_ms: 10_000,
        };
        assert_eq!(err.code(), NvpErrorCode::ConnectionTimeout);
        assert!(err.is_transport());
    }

    #[test]
    fn test_error_display() {
        let err = NvpError::validation("L_NAME", "cannot exceed 127 characters");
        assert_eq!(err.to_string(), "invalid L_NAME: cannot exceed 127 characters");

        let err = NvpError::TypeMismatch {
            expected: "date",
            found: "float",
        };
        assert_eq!(err.to_string(), "expected date, got float");
    }
}

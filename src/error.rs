//! Error types for client operations
//!
//! The demo client never fails on its own. These errors exist so that a
//! substituted operation can fail and have that failure travel, unmodified,
//! back to the caller of the orchestrator.

use crate::client::Operation;
use thiserror::Error;

/// Failure of a single client operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Connect failed: {message}")]
    ConnectFailed { message: String },

    #[error("Send failed: {message}")]
    SendFailed { message: String },

    #[error("Close failed: {message}")]
    CloseFailed { message: String },
}

impl ClientError {
    /// Create connect error
    pub fn connect_failed<S: Into<String>>(message: S) -> Self {
        Self::ConnectFailed {
            message: message.into(),
        }
    }

    /// Create send error
    pub fn send_failed<S: Into<String>>(message: S) -> Self {
        Self::SendFailed {
            message: message.into(),
        }
    }

    /// Create close error
    pub fn close_failed<S: Into<String>>(message: S) -> Self {
        Self::CloseFailed {
            message: message.into(),
        }
    }

    /// The operation that produced this error
    pub fn operation(&self) -> Operation {
        match self {
            ClientError::ConnectFailed { .. } => Operation::Connect,
            ClientError::SendFailed { .. } => Operation::Send,
            ClientError::CloseFailed { .. } => Operation::Close,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_failed_constructor() {
        let error = ClientError::connect_failed("refused");
        assert!(matches!(error, ClientError::ConnectFailed { .. }));
        assert_eq!(error.to_string(), "Connect failed: refused");
    }

    #[test]
    fn test_send_failed_constructor() {
        let error = ClientError::send_failed("payload rejected");
        assert!(matches!(error, ClientError::SendFailed { .. }));
        assert_eq!(error.to_string(), "Send failed: payload rejected");
    }

    #[test]
    fn test_close_failed_constructor() {
        let error = ClientError::close_failed("already closed");
        assert!(matches!(error, ClientError::CloseFailed { .. }));
        assert_eq!(error.to_string(), "Close failed: already closed");
    }

    #[test]
    fn test_error_maps_back_to_operation() {
        assert_eq!(
            ClientError::connect_failed("x").operation(),
            Operation::Connect
        );
        assert_eq!(ClientError::send_failed("x").operation(), Operation::Send);
        assert_eq!(ClientError::close_failed("x").operation(), Operation::Close);
    }
}

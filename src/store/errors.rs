//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// "Absent" is never an error: reads of missing keys or fields return
/// `None` or an empty list instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("could not connect to redis at {addr}: {message}")]
    Connection { addr: String, message: String },

    #[error("{command} failed: {message}")]
    Command { command: String, message: String },
}

impl StoreError {
    pub fn connection(addr: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Connection {
            addr: addr.into(),
            message: message.into(),
        }
    }

    pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Command {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Returns true for connection-level failures
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StoreError::connection("localhost:6379", "refused");
        assert_eq!(
            err.to_string(),
            "could not connect to redis at localhost:6379: refused"
        );
        assert!(err.is_connection());

        let err = StoreError::command("HGET orchestration:1 status", "READONLY");
        assert_eq!(err.to_string(), "HGET orchestration:1 status failed: READONLY");
        assert!(!err.is_connection());
    }
}

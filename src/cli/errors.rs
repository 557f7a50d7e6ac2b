//! CLI-specific error types
//!
//! Every CliError ends the run with a non-zero exit. Per-record failures
//! never become CliErrors; the discovery pipeline logs and skips them.

use std::fmt;
use std::io;

use crate::discovery::DiscoveryError;
use crate::filter::FilterError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or flag values invalid
    ConfigError,
    /// `-filters` could not be parsed
    FilterError,
    /// Store unreachable
    ConnectionFailed,
    /// Listing keys failed
    EnumerationFailed,
    /// A single record could not be read
    RecordFailed,
    /// I/O error writing the report
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "EXECSCAN_CLI_CONFIG_ERROR",
            Self::FilterError => "EXECSCAN_CLI_FILTER_ERROR",
            Self::ConnectionFailed => "EXECSCAN_CLI_CONNECTION_FAILED",
            Self::EnumerationFailed => "EXECSCAN_CLI_ENUMERATION_FAILED",
            Self::RecordFailed => "EXECSCAN_CLI_RECORD_FAILED",
            Self::IoError => "EXECSCAN_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("Invalid config JSON: {}", e))
    }
}

impl From<FilterError> for CliError {
    fn from(e: FilterError) -> Self {
        Self::new(
            CliErrorCode::FilterError,
            format!("could not parse given filters: {}", e),
        )
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        let code = if e.is_connection() {
            CliErrorCode::ConnectionFailed
        } else {
            CliErrorCode::EnumerationFailed
        };
        Self::new(code, e.to_string())
    }
}

/// `DiscoveryPipeline::run` only returns `Enumeration`. The record variants
/// are logged and skipped inside the pass.
impl From<DiscoveryError> for CliError {
    fn from(e: DiscoveryError) -> Self {
        match e {
            DiscoveryError::Enumeration(source) => Self::new(
                CliErrorCode::EnumerationFailed,
                format!("failed listing all keys: {}", source),
            ),
            record @ (DiscoveryError::Timestamp { .. } | DiscoveryError::FieldRead { .. }) => {
                Self::new(CliErrorCode::RecordFailed, record.to_string())
            }
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_code() {
        let err: CliError = FilterError::Malformed {
            token: "B".to_string(),
        }
        .into();
        assert_eq!(err.code(), &CliErrorCode::FilterError);
        assert!(err.message().contains("'B'"));
        assert!(err.to_string().starts_with("EXECSCAN_CLI_FILTER_ERROR: "));
    }

    #[test]
    fn test_store_error_codes() {
        let err: CliError = StoreError::connection("localhost:6379", "refused").into();
        assert_eq!(err.code_str(), "EXECSCAN_CLI_CONNECTION_FAILED");

        let err: CliError =
            DiscoveryError::Enumeration(StoreError::command("KEYS orchestration:*", "LOADING"))
                .into();
        assert_eq!(err.code_str(), "EXECSCAN_CLI_ENUMERATION_FAILED");
        assert!(err.message().contains("LOADING"));
    }

    #[test]
    fn test_record_errors_not_labelled_io() {
        let err: CliError = DiscoveryError::Timestamp {
            key: "orchestration:1".to_string(),
            reason: "field absent".to_string(),
        }
        .into();
        assert_eq!(err.code(), &CliErrorCode::RecordFailed);
        assert!(err.message().contains("orchestration:1"));

        let err: CliError = DiscoveryError::FieldRead {
            key: "orchestration:1".to_string(),
            field: "name".to_string(),
            reason: "field absent".to_string(),
        }
        .into();
        assert_eq!(err.code_str(), "EXECSCAN_CLI_RECORD_FAILED");
    }
}

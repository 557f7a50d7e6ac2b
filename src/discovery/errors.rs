//! Discovery error types
//!
//! Only `Enumeration` is fatal. The per-record variants are logged and the
//! record is skipped (or, for `FieldRead`, shown with a sentinel). Predicate
//! failures use `filter::EvaluationError`.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for discovery operations
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Discovery errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    #[error("failed listing keys: {0}")]
    Enumeration(#[source] StoreError),

    #[error("invalid startTime on '{key}': {reason}")]
    Timestamp { key: String, reason: String },

    #[error("failed reading field '{field}' on '{key}': {reason}")]
    FieldRead {
        key: String,
        field: String,
        reason: String,
    },
}

impl DiscoveryError {
    /// Returns true when the whole run must stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, DiscoveryError::Enumeration(_))
    }
}

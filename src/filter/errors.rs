//! Filter error types
//!
//! - `FilterError`: the `-filters` string could not be parsed (fatal at startup)
//! - `EvaluationError`: a predicate could not be evaluated for one record
//!   (the record is skipped, the run continues)

use thiserror::Error;

use crate::store::StoreError;

/// Result type for filter parsing
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid filter format '{token}', require 'Key=Value'")]
    Malformed { token: String },
}

impl FilterError {
    /// The token that failed to parse
    pub fn token(&self) -> &str {
        match self {
            FilterError::Malformed { token } => token,
        }
    }
}

/// A predicate evaluation failed on a store read other than "absent"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed evaluating filter on hash '{key}' field '{}': {source}", .field.as_deref().unwrap_or("*"))]
pub struct EvaluationError {
    /// Record key being evaluated
    pub key: String,
    /// Field being read, `None` when listing all fields failed
    pub field: Option<String>,
    #[source]
    pub source: StoreError,
}

impl EvaluationError {
    pub fn field_read(key: &str, field: &str, source: StoreError) -> Self {
        Self {
            key: key.to_string(),
            field: Some(field.to_string()),
            source,
        }
    }

    pub fn field_listing(key: &str, source: StoreError) -> Self {
        Self {
            key: key.to_string(),
            field: None,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_names_token() {
        let err = FilterError::Malformed {
            token: "B".to_string(),
        };
        assert_eq!(err.token(), "B");
        assert_eq!(
            err.to_string(),
            "invalid filter format 'B', require 'Key=Value'"
        );
    }

    #[test]
    fn test_evaluation_error_carries_key_and_field() {
        let err = EvaluationError::field_read(
            "orchestration:1",
            "status",
            StoreError::command("HGET orchestration:1 status", "boom"),
        );
        let display = err.to_string();
        assert!(display.contains("orchestration:1"));
        assert!(display.contains("'status'"));

        let err = EvaluationError::field_listing(
            "orchestration:1",
            StoreError::command("HKEYS orchestration:1", "boom"),
        );
        assert!(err.to_string().contains("field '*'"));
    }
}

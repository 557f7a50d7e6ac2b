//! Result types for execution discovery

use chrono::{DateTime, TimeDelta, Utc};

/// Sentinel shown in place of an extra field that could not be read
pub const FIELD_READ_SENTINEL: &str = "ERR";

/// A matching execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Store key of the execution hash
    pub key: String,
    /// When the execution started
    pub start_time: DateTime<Utc>,
    /// Extra field values, in the configured field order
    pub extra_fields: Vec<String>,
}

impl Execution {
    pub fn new(key: impl Into<String>, start_time: DateTime<Utc>, extra_fields: Vec<String>) -> Self {
        Self {
            key: key.into(),
            start_time,
            extra_fields,
        }
    }

    /// Time the execution has been running as of `now`
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.start_time
    }
}

/// Outcome of one discovery pass
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    /// Matching executions, most recently started first
    pub executions: Vec<Execution>,
    /// Keys returned by enumeration
    pub scanned_count: usize,
    /// Index and aggregate keys skipped without evaluation
    pub excluded_count: usize,
    /// Records that did not satisfy every predicate
    pub rejected_count: usize,
    /// Records dropped on an evaluation or startTime failure
    pub skipped_count: usize,
}

impl DiscoveryReport {
    /// Number of executions that made it into the report
    pub fn matched_count(&self) -> usize {
        self.executions.len()
    }
}

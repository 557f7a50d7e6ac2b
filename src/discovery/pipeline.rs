//! Execution discovery pipeline
//!
//! Single pass over the store, in strict order:
//! 1. Enumerate keys matching `<type>:*`
//! 2. Drop index and aggregate keys
//! 3. Evaluate every predicate, in order (reject on first false or error)
//! 4. Read and parse `startTime` (skip the record on failure)
//! 5. Read extra fields (sentinel on failure, record kept)
//! 6. Sort, most recently started first
//!
//! Only a failed enumeration aborts the pass.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::filter::{Predicate, PredicateEvaluator};
use crate::observability::Event;
use crate::store::ExecutionStore;

use super::errors::{DiscoveryError, DiscoveryResult};
use super::exclusions::{key_pattern, KeyExclusions};
use super::result::{DiscoveryReport, Execution, FIELD_READ_SENTINEL};
use super::sorter::ExecutionSorter;

/// Hash field holding the execution start, in epoch milliseconds
pub const START_TIME_FIELD: &str = "startTime";

/// What to look for in one pass
#[derive(Debug, Clone)]
pub struct DiscoveryPlan {
    /// Key namespace, `orchestration` or `pipeline`
    pub execution_type: String,
    /// Predicates, status first
    pub predicates: Vec<Predicate>,
    /// Extra hash fields to report, in column order
    pub extra_fields: Vec<String>,
}

impl DiscoveryPlan {
    pub fn new(
        execution_type: impl Into<String>,
        predicates: Vec<Predicate>,
        extra_fields: Vec<String>,
    ) -> Self {
        Self {
            execution_type: execution_type.into(),
            predicates,
            extra_fields,
        }
    }
}

/// Runs discovery plans against a store
pub struct DiscoveryPipeline<'a, S: ExecutionStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: ExecutionStore + ?Sized> DiscoveryPipeline<'a, S> {
    /// Creates a pipeline over a store. The pipeline holds the store for
    /// the whole pass.
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Runs one discovery pass
    pub fn run(&mut self, plan: &DiscoveryPlan) -> DiscoveryResult<DiscoveryReport> {
        let pattern = key_pattern(&plan.execution_type);
        info!(
            event = Event::KeysScanStart.as_str(),
            execution_type = %plan.execution_type,
            "Finding all keys for type: {}...",
            plan.execution_type
        );
        let keys = self
            .store
            .keys(&pattern)
            .map_err(DiscoveryError::Enumeration)?;
        info!(event = Event::KeysListed.as_str(), count = keys.len(), "listed keys");

        let exclusions = KeyExclusions::for_type(&plan.execution_type);
        let mut report = DiscoveryReport {
            scanned_count: keys.len(),
            ..DiscoveryReport::default()
        };

        info!(event = Event::FilteringStart.as_str(), "Filtering...");
        for key in &keys {
            if exclusions.is_excluded(key) {
                report.excluded_count += 1;
                continue;
            }

            match PredicateEvaluator::matches(&mut *self.store, key, &plan.predicates) {
                Ok(true) => {}
                Ok(false) => {
                    report.rejected_count += 1;
                    continue;
                }
                Err(e) => {
                    warn!(
                        event = Event::FilterFailed.as_str(),
                        key = %key,
                        error = %e,
                        "could not complete filter"
                    );
                    report.skipped_count += 1;
                    continue;
                }
            }

            let start_time = match self.read_start_time(key) {
                Ok(start_time) => start_time,
                Err(e) => {
                    warn!(
                        event = Event::StartTimeInvalid.as_str(),
                        key = %key,
                        error = %e,
                        "skipping execution without a usable startTime"
                    );
                    report.skipped_count += 1;
                    continue;
                }
            };

            let extra_fields = self.read_extra_fields(key, &plan.extra_fields);
            report
                .executions
                .push(Execution::new(key.as_str(), start_time, extra_fields));
        }

        ExecutionSorter::sort(&mut report.executions);

        info!(
            event = Event::DiscoveryComplete.as_str(),
            scanned = report.scanned_count,
            excluded = report.excluded_count,
            rejected = report.rejected_count,
            skipped = report.skipped_count,
            matched = report.matched_count(),
            "discovery complete"
        );
        Ok(report)
    }

    /// Reads `startTime` as epoch milliseconds
    fn read_start_time(&mut self, key: &str) -> DiscoveryResult<DateTime<Utc>> {
        let raw = self
            .store
            .hget(key, START_TIME_FIELD)
            .map_err(|e| DiscoveryError::Timestamp {
                key: key.to_string(),
                reason: e.to_string(),
            })?
            .ok_or_else(|| DiscoveryError::Timestamp {
                key: key.to_string(),
                reason: "field absent".to_string(),
            })?;
        parse_start_time(key, &raw)
    }

    /// Reads each extra field, substituting the sentinel for any that fail
    fn read_extra_fields(&mut self, key: &str, fields: &[String]) -> Vec<String> {
        fields
            .iter()
            .map(|field| match self.read_field(key, field) {
                Ok(value) => value,
                Err(e) => {
                    warn!(
                        event = Event::FieldReadFailed.as_str(),
                        key,
                        field = %field,
                        error = %e,
                        "could not read field"
                    );
                    FIELD_READ_SENTINEL.to_string()
                }
            })
            .collect()
    }

    fn read_field(&mut self, key: &str, field: &str) -> DiscoveryResult<String> {
        let value = self
            .store
            .hget(key, field)
            .map_err(|e| DiscoveryError::FieldRead {
                key: key.to_string(),
                field: field.to_string(),
                reason: e.to_string(),
            })?;
        value.ok_or_else(|| DiscoveryError::FieldRead {
            key: key.to_string(),
            field: field.to_string(),
            reason: "field absent".to_string(),
        })
    }
}

/// Parses a decimal epoch-milliseconds string
pub fn parse_start_time(key: &str, raw: &str) -> DiscoveryResult<DateTime<Utc>> {
    let millis: i64 = raw.parse().map_err(|_| DiscoveryError::Timestamp {
        key: key.to_string(),
        reason: format!("'{}' is not an integer", raw),
    })?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DiscoveryError::Timestamp {
        key: key.to_string(),
        reason: format!("{} is out of range", millis),
    })
}

//! Execution ordering
//!
//! Most recently started first, which is shortest running first. The sort
//! is stable, so equal start times keep enumeration order.

use std::cmp::Reverse;

use super::result::Execution;

/// Sorts discovered executions
pub struct ExecutionSorter;

impl ExecutionSorter {
    /// Sorts by start time, descending
    pub fn sort(executions: &mut [Execution]) {
        executions.sort_by_key(|execution| Reverse(execution.start_time));
    }
}

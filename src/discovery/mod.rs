//! Execution discovery subsystem
//!
//! Finds executions in the store that satisfy a predicate list and orders
//! them by how long they have been running.
//!
//! # Flow (strict order)
//!
//! 1. Enumerate `<type>:*` keys
//! 2. Exclude `<type>:app:*`, `<type>:executions*` and `*:stageIndex` keys
//! 3. Evaluate predicates (AND, in list order)
//! 4. Parse `startTime` (epoch milliseconds)
//! 5. Read extra fields, `ERR` on failure
//! 6. Sort, most recently started first
//!
//! # Failure policy
//!
//! - Enumeration failure: fatal
//! - Predicate evaluation failure: record skipped, logged
//! - Bad or missing `startTime`: record skipped, logged
//! - Extra field failure: sentinel shown, record kept

mod errors;
mod exclusions;
mod pipeline;
mod result;
mod sorter;

pub use errors::{DiscoveryError, DiscoveryResult};
pub use exclusions::{key_pattern, KeyExclusions};
pub use pipeline::{parse_start_time, DiscoveryPipeline, DiscoveryPlan, START_TIME_FIELD};
pub use result::{DiscoveryReport, Execution, FIELD_READ_SENTINEL};
pub use sorter::ExecutionSorter;

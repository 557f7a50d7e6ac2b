//! execscan - find the longest running executions in a Redis workflow store
//!
//! Lists `orchestration` or `pipeline` execution hashes that match a status
//! and optional `Key=Value` filters, ordered by how long they have been
//! running.

pub mod cli;
pub mod clock;
pub mod discovery;
pub mod filter;
pub mod observability;
pub mod report;
pub mod store;

//! Observability for execscan
//!
//! Diagnostics go through `tracing`. Each line carries an `event` field
//! naming the stage it came from, plus structured fields such as `key` and
//! `field`.
//!
//! # Principles
//!
//! 1. Logs never change what the report contains
//! 2. Logs go to stderr, the report to stdout
//! 3. Per-record failures are warnings; only startup failures are fatal
//!
//! # Usage
//!
//! ```ignore
//! use execscan::observability::{init_logging, Event, Verbosity};
//!
//! init_logging(Verbosity::from_flags(quiet, debug));
//! tracing::info!(event = Event::KeysListed.as_str(), count = 42, "listed keys");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{env_filter, init_logging, Verbosity};

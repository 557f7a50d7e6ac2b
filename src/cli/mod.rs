//! CLI module for execscan
//!
//! Parses flags, resolves configuration, wires the Redis store into the
//! discovery pipeline, and prints the report.

mod args;
mod commands;
mod config;
mod errors;

pub use args::{normalize_args, Cli};
pub use commands::{build_plan, run, scan};
pub use config::{split_fields, Config, ConfigFile};
pub use errors::{CliError, CliErrorCode, CliResult};

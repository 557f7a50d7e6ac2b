//! Report rendering
//!
//! Formats discovered executions for standard output, with elapsed run
//! times printed in Go's duration notation (`3h2m1s`).

mod duration;
mod table;

pub use duration::format_duration;
pub use table::{ReportRenderer, COLUMN_SEPARATOR};

//! Plain-text report table
//!
//! One header line, then one line per execution. Columns are joined by two
//! spaces: key, elapsed run time, then each extra field in the order given.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use super::duration::format_duration;
use crate::discovery::Execution;

/// Column separator
pub const COLUMN_SEPARATOR: &str = "  ";

/// Renders discovered executions as a text table
pub struct ReportRenderer<'a> {
    extra_fields: &'a [String],
    now: DateTime<Utc>,
}

impl<'a> ReportRenderer<'a> {
    /// Create a renderer. `now` is the instant elapsed times are measured to.
    pub fn new(extra_fields: &'a [String], now: DateTime<Utc>) -> Self {
        Self { extra_fields, now }
    }

    /// Header naming every column
    pub fn header(&self) -> String {
        let mut columns = vec!["key", "runTime"];
        columns.extend(self.extra_fields.iter().map(String::as_str));
        columns.join(COLUMN_SEPARATOR)
    }

    /// One table row
    pub fn row(&self, execution: &Execution) -> String {
        let run_time = format_duration(execution.elapsed(self.now));
        let mut columns = vec![execution.key.as_str(), run_time.as_str()];
        columns.extend(execution.extra_fields.iter().map(String::as_str));
        columns.join(COLUMN_SEPARATOR)
    }

    /// Write the header and every row
    pub fn render<W: Write>(&self, writer: &mut W, executions: &[Execution]) -> io::Result<()> {
        writeln!(writer, "{}", self.header())?;
        for execution in executions {
            writeln!(writer, "{}", self.row(execution))?;
        }
        writer.flush()
    }
}
